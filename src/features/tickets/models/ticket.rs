use chrono::NaiveDate;
use sqlx::FromRow;

/// A service ticket joined with its customer and (optional) employee.
///
/// One flat row per ticket; the nested response shape is built from it at the
/// response boundary.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TicketRow {
    pub id: i64,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<NaiveDate>,
    pub customer_id: i64,
    pub customer_user_id: String,
    pub customer_address: String,
    pub customer_full_name: String,
    pub employee_id: Option<i64>,
    pub employee_specialty: Option<String>,
    pub employee_full_name: Option<String>,
}

impl TicketRow {
    /// Whether the ticket belongs to the account with the given `sub`
    pub fn is_owned_by(&self, user_sub: &str) -> bool {
        self.customer_user_id == user_sub
    }
}

/// Values for a freshly submitted ticket: no employee and no completion date yet
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub customer_id: i64,
    pub description: String,
    pub emergency: bool,
}

/// Which tickets a list query returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketScope {
    /// Every ticket (staff)
    All,
    /// Tickets with a completion date (staff, `status=done`)
    Completed,
    /// Tickets of one customer
    Customer(i64),
}
