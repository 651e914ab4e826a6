use sqlx::FromRow;

/// Database model for an employee who can be assigned to tickets
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
#[allow(dead_code)]
pub struct Employee {
    pub id: i64,
    pub user_id: String,
    pub specialty: String,
    pub full_name: String,
}
