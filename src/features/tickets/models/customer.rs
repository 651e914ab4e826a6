use sqlx::FromRow;

/// Database model for a customer, linked 1:1 to an account through `user_id`
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
#[allow(dead_code)]
pub struct Customer {
    pub id: i64,
    pub user_id: String,
    pub address: String,
    pub full_name: String,
}
