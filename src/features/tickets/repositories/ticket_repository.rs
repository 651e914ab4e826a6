use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::tickets::models::{Customer, Employee, NewTicket, TicketRow, TicketScope};

/// Persistence seam for tickets and the records they reference.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_customer_by_user(&self, user_id: &str) -> Result<Option<Customer>>;
    async fn find_employee(&self, id: i64) -> Result<Option<Employee>>;

    async fn insert_ticket(&self, ticket: NewTicket) -> Result<TicketRow>;
    async fn find_ticket(&self, id: i64) -> Result<Option<TicketRow>>;
    async fn list_tickets(&self, scope: TicketScope) -> Result<Vec<TicketRow>>;

    /// Returns `false` when no ticket with `ticket_id` exists.
    async fn assign_employee(&self, ticket_id: i64, employee_id: i64) -> Result<bool>;

    /// Returns `false` when no ticket with `id` exists.
    async fn delete_ticket(&self, id: i64) -> Result<bool>;
}

const TICKET_SELECT: &str = r#"
    SELECT
        t.id, t.description, t.emergency, t.date_completed,
        c.id AS customer_id, c.user_id AS customer_user_id,
        c.address AS customer_address, c.full_name AS customer_full_name,
        e.id AS employee_id, e.specialty AS employee_specialty,
        e.full_name AS employee_full_name
    FROM service_tickets t
    JOIN customers c ON c.id = t.customer_id
    LEFT JOIN employees e ON e.id = t.employee_id
"#;

/// Convert database error to more specific AppError with user-friendly messages
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Foreign key violation (PostgreSQL error code 23503)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23503")) {
            return AppError::BadRequest("Referenced record does not exist.".to_string());
        }
    }
    AppError::Database(e)
}

pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn find_customer_by_user(&self, user_id: &str) -> Result<Option<Customer>> {
        sqlx::query_as::<_, Customer>(
            "SELECT id, user_id, address, full_name FROM customers WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get customer by user: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_employee(&self, id: i64) -> Result<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, user_id, specialty, full_name FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get employee by ID: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert_ticket(&self, ticket: NewTicket) -> Result<TicketRow> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO service_tickets (customer_id, description, emergency)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(ticket.customer_id)
        .bind(&ticket.description)
        .bind(ticket.emergency)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create ticket: {:?}", e);
            handle_db_error(e)
        })?;

        self.find_ticket(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Ticket {} vanished after insert", id)))
    }

    async fn find_ticket(&self, id: i64) -> Result<Option<TicketRow>> {
        let query = format!("{} WHERE t.id = $1", TICKET_SELECT);
        sqlx::query_as::<_, TicketRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get ticket by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_tickets(&self, scope: TicketScope) -> Result<Vec<TicketRow>> {
        let rows = match scope {
            TicketScope::All => {
                let query = format!("{} ORDER BY t.id", TICKET_SELECT);
                sqlx::query_as::<_, TicketRow>(&query)
                    .fetch_all(&self.pool)
                    .await
            }
            TicketScope::Completed => {
                let query = format!(
                    "{} WHERE t.date_completed IS NOT NULL ORDER BY t.id",
                    TICKET_SELECT
                );
                sqlx::query_as::<_, TicketRow>(&query)
                    .fetch_all(&self.pool)
                    .await
            }
            TicketScope::Customer(customer_id) => {
                let query = format!("{} WHERE t.customer_id = $1 ORDER BY t.id", TICKET_SELECT);
                sqlx::query_as::<_, TicketRow>(&query)
                    .bind(customer_id)
                    .fetch_all(&self.pool)
                    .await
            }
        };

        rows.map_err(|e| {
            tracing::error!("Failed to list tickets ({:?}): {:?}", scope, e);
            AppError::Database(e)
        })
    }

    async fn assign_employee(&self, ticket_id: i64, employee_id: i64) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE service_tickets SET employee_id = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(employee_id)
        .bind(ticket_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to assign employee: {:?}", e);
            handle_db_error(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_ticket(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM service_tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete ticket: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
