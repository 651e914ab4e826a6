use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::tickets::{dtos as tickets_dtos, handlers as tickets_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        tickets_handlers::create_ticket,
        tickets_handlers::list_tickets,
        tickets_handlers::get_ticket,
        tickets_handlers::assign_employee,
        tickets_handlers::delete_ticket,
    ),
    components(
        schemas(
            ErrorResponse,
            tickets_dtos::CreateTicketDto,
            tickets_dtos::AssignEmployeeDto,
            tickets_dtos::TicketResponseDto,
            tickets_dtos::CustomerSummaryDto,
            tickets_dtos::EmployeeSummaryDto,
        )
    ),
    tags(
        (name = "tickets", description = "Repair service tickets"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Repairs API",
        version = "0.1.0",
        description = "Service ticket API for the repair shop",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
