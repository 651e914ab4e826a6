use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{ValidatedJson, ValidatedPath};
use crate::features::auth::guards::RequireStaff;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::tickets::dtos::{
    AssignEmployeeDto, CreateTicketDto, TicketQueryParams, TicketResponseDto,
};
use crate::features::tickets::services::TicketService;
use crate::shared::types::ErrorResponse;

/// Submit a ticket for the caller's customer profile
#[utoipa::path(
    post,
    path = "/api/tickets",
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket created", body = TicketResponseDto),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 403, description = "No customer profile linked to caller", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn create_ticket(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    ValidatedJson(dto): ValidatedJson<CreateTicketDto>,
) -> Result<Json<TicketResponseDto>> {
    let ticket = service.create(&user, dto).await?;
    Ok(Json(ticket))
}

/// List tickets (staff: all, optionally `status=done`; customers: own)
#[utoipa::path(
    get,
    path = "/api/tickets",
    params(TicketQueryParams),
    responses(
        (status = 200, description = "Tickets visible to the caller", body = Vec<TicketResponseDto>),
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn list_tickets(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    Query(params): Query<TicketQueryParams>,
) -> Result<Json<Vec<TicketResponseDto>>> {
    let tickets = service.list(&user, &params).await?;
    Ok(Json(tickets))
}

/// Get ticket by ID
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket found", body = TicketResponseDto),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn get_ticket(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<TicketResponseDto>> {
    let ticket = service.get_by_id(&user, id).await?;
    Ok(Json(ticket))
}

/// Assign an employee to a ticket (staff only)
#[utoipa::path(
    put,
    path = "/api/tickets/{id}",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    request_body = AssignEmployeeDto,
    responses(
        (status = 204, description = "Employee assigned"),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 403, description = "Staff access required", body = ErrorResponse),
        (status = 404, description = "Ticket or employee not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn assign_employee(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<TicketService>>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(dto): ValidatedJson<AssignEmployeeDto>,
) -> Result<StatusCode> {
    service.assign_employee(id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn delete_ticket(
    user: AuthenticatedUser,
    State(service): State<Arc<TicketService>>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<StatusCode> {
    service.delete(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
