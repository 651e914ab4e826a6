use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::tickets::dtos::{
    AssignEmployeeDto, CreateTicketDto, TicketQueryParams, TicketResponseDto,
};
use crate::features::tickets::models::{NewTicket, TicketRow, TicketScope};
use crate::features::tickets::repositories::TicketRepository;

/// Service for ticket operations
pub struct TicketService {
    repository: Arc<dyn TicketRepository>,
}

impl TicketService {
    pub fn new(repository: Arc<dyn TicketRepository>) -> Self {
        Self { repository }
    }

    /// Submit a ticket on behalf of the caller's customer profile
    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        dto: CreateTicketDto,
    ) -> Result<TicketResponseDto> {
        let customer = self
            .repository
            .find_customer_by_user(&user.sub)
            .await?
            .ok_or_else(|| {
                AppError::Forbidden("No customer profile is linked to this account".to_string())
            })?;

        let ticket = self
            .repository
            .insert_ticket(NewTicket {
                customer_id: customer.id,
                description: dto.description,
                emergency: dto.emergency,
            })
            .await?;

        tracing::info!(
            "Ticket created: id={}, customer={}, emergency={}",
            ticket.id,
            customer.id,
            ticket.emergency
        );

        Ok(ticket.into())
    }

    /// List tickets visible to the caller.
    ///
    /// Staff see everything, narrowed to completed tickets for `status=done`.
    /// Everyone else sees their own tickets and the status filter is ignored.
    pub async fn list(
        &self,
        user: &AuthenticatedUser,
        params: &TicketQueryParams,
    ) -> Result<Vec<TicketResponseDto>> {
        let scope = if user.is_staff() {
            if params.wants_completed() {
                TicketScope::Completed
            } else {
                TicketScope::All
            }
        } else {
            match self.repository.find_customer_by_user(&user.sub).await? {
                Some(customer) => TicketScope::Customer(customer.id),
                None => return Ok(Vec::new()),
            }
        };

        let tickets = self.repository.list_tickets(scope).await?;
        Ok(tickets.into_iter().map(TicketResponseDto::from).collect())
    }

    /// Get ticket by ID
    pub async fn get_by_id(&self, user: &AuthenticatedUser, id: i64) -> Result<TicketResponseDto> {
        Ok(self.find_visible(user, id).await?.into())
    }

    /// Assign an employee to a ticket. Only the assignment changes.
    pub async fn assign_employee(&self, ticket_id: i64, dto: AssignEmployeeDto) -> Result<()> {
        self.repository
            .find_ticket(ticket_id)
            .await?
            .ok_or_else(|| ticket_not_found(ticket_id))?;

        let employee = self
            .repository
            .find_employee(dto.employee)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee '{}' not found", dto.employee)))?;

        // The ticket may be deleted between lookup and update
        if !self
            .repository
            .assign_employee(ticket_id, employee.id)
            .await?
        {
            return Err(ticket_not_found(ticket_id));
        }

        tracing::info!(
            "Ticket assigned: id={}, employee={}",
            ticket_id,
            employee.id
        );
        Ok(())
    }

    /// Delete a ticket visible to the caller
    pub async fn delete(&self, user: &AuthenticatedUser, id: i64) -> Result<()> {
        self.find_visible(user, id).await?;

        if !self.repository.delete_ticket(id).await? {
            return Err(ticket_not_found(id));
        }

        tracing::info!("Ticket deleted: id={}, by={}", id, user.sub);
        Ok(())
    }

    /// Staff see every ticket; others only their own. Hidden tickets read as missing.
    async fn find_visible(&self, user: &AuthenticatedUser, id: i64) -> Result<TicketRow> {
        let ticket = self
            .repository
            .find_ticket(id)
            .await?
            .ok_or_else(|| ticket_not_found(id))?;

        if user.is_staff() || ticket.is_owned_by(&user.sub) {
            Ok(ticket)
        } else {
            Err(ticket_not_found(id))
        }
    }
}

fn ticket_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Ticket '{}' not found", id))
}
