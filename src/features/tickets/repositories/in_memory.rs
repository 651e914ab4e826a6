//! In-memory `TicketRepository` for tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::tickets::models::{Customer, Employee, NewTicket, TicketRow, TicketScope};

use super::TicketRepository;

#[derive(Debug, Clone)]
struct StoredTicket {
    id: i64,
    customer_id: i64,
    employee_id: Option<i64>,
    description: String,
    emergency: bool,
    date_completed: Option<NaiveDate>,
}

#[derive(Default)]
struct State {
    customers: BTreeMap<i64, Customer>,
    employees: BTreeMap<i64, Employee>,
    tickets: BTreeMap<i64, StoredTicket>,
    next_ticket_id: i64,
}

impl State {
    fn join(&self, ticket: &StoredTicket) -> Result<TicketRow> {
        let customer = self.customers.get(&ticket.customer_id).ok_or_else(|| {
            AppError::Internal(format!("Ticket {} has no customer", ticket.id))
        })?;
        let employee = ticket.employee_id.and_then(|id| self.employees.get(&id));

        Ok(TicketRow {
            id: ticket.id,
            description: ticket.description.clone(),
            emergency: ticket.emergency,
            date_completed: ticket.date_completed,
            customer_id: customer.id,
            customer_user_id: customer.user_id.clone(),
            customer_address: customer.address.clone(),
            customer_full_name: customer.full_name.clone(),
            employee_id: employee.map(|e| e.id),
            employee_specialty: employee.map(|e| e.specialty.clone()),
            employee_full_name: employee.map(|e| e.full_name.clone()),
        })
    }
}

/// Mirrors the `WHERE` clauses of the SQL list queries
fn in_scope(scope: TicketScope, row: &TicketRow) -> bool {
    match scope {
        TicketScope::All => true,
        TicketScope::Completed => row.date_completed.is_some(),
        TicketScope::Customer(customer_id) => row.customer_id == customer_id,
    }
}

#[derive(Default)]
pub struct InMemoryTicketRepository {
    state: Mutex<State>,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_customer(&self, id: i64, user_id: &str, address: &str, full_name: &str) {
        self.state.lock().unwrap().customers.insert(
            id,
            Customer {
                id,
                user_id: user_id.to_string(),
                address: address.to_string(),
                full_name: full_name.to_string(),
            },
        );
    }

    pub fn add_employee(&self, id: i64, user_id: &str, specialty: &str, full_name: &str) {
        self.state.lock().unwrap().employees.insert(
            id,
            Employee {
                id,
                user_id: user_id.to_string(),
                specialty: specialty.to_string(),
                full_name: full_name.to_string(),
            },
        );
    }

    /// Stand-in for the external process that closes tickets.
    pub fn complete_ticket(&self, id: i64, date: NaiveDate) {
        if let Some(ticket) = self.state.lock().unwrap().tickets.get_mut(&id) {
            ticket.date_completed = Some(date);
        }
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn find_customer_by_user(&self, user_id: &str) -> Result<Option<Customer>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .customers
            .values()
            .find(|c| c.user_id == user_id)
            .cloned())
    }

    async fn find_employee(&self, id: i64) -> Result<Option<Employee>> {
        Ok(self.state.lock().unwrap().employees.get(&id).cloned())
    }

    async fn insert_ticket(&self, ticket: NewTicket) -> Result<TicketRow> {
        let mut state = self.state.lock().unwrap();
        if !state.customers.contains_key(&ticket.customer_id) {
            return Err(AppError::BadRequest(
                "Referenced record does not exist.".to_string(),
            ));
        }

        state.next_ticket_id += 1;
        let stored = StoredTicket {
            id: state.next_ticket_id,
            customer_id: ticket.customer_id,
            employee_id: None,
            description: ticket.description,
            emergency: ticket.emergency,
            date_completed: None,
        };
        let row = state.join(&stored)?;
        state.tickets.insert(stored.id, stored);
        Ok(row)
    }

    async fn find_ticket(&self, id: i64) -> Result<Option<TicketRow>> {
        let state = self.state.lock().unwrap();
        state.tickets.get(&id).map(|t| state.join(t)).transpose()
    }

    async fn list_tickets(&self, scope: TicketScope) -> Result<Vec<TicketRow>> {
        let state = self.state.lock().unwrap();
        let mut rows = Vec::new();
        // BTreeMap iteration is ascending by id, matching `ORDER BY t.id`
        for ticket in state.tickets.values() {
            let row = state.join(ticket)?;
            if in_scope(scope, &row) {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    async fn assign_employee(&self, ticket_id: i64, employee_id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        if !state.employees.contains_key(&employee_id) {
            return Err(AppError::BadRequest(
                "Referenced record does not exist.".to_string(),
            ));
        }
        match state.tickets.get_mut(&ticket_id) {
            Some(ticket) => {
                ticket.employee_id = Some(employee_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_ticket(&self, id: i64) -> Result<bool> {
        Ok(self.state.lock().unwrap().tickets.remove(&id).is_some())
    }
}
