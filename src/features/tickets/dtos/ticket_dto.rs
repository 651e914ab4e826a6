use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::tickets::models::TicketRow;
use crate::shared::constants::STATUS_DONE;
use crate::shared::validation::validate_not_blank;

/// Request DTO for submitting a ticket
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTicketDto {
    /// What needs repairing
    #[validate(
        length(min = 1, max = 2000, message = "Description must be 1-2000 characters"),
        custom(function = "validate_not_blank", message = "Description must not be blank")
    )]
    pub description: String,

    /// Whether the repair is urgent
    pub emergency: bool,
}

/// Request DTO for assigning an employee to a ticket
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssignEmployeeDto {
    /// Employee ID
    #[validate(range(min = 1, message = "Employee ID must be positive"))]
    pub employee: i64,
}

/// Query params for listing tickets
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct TicketQueryParams {
    /// `done` limits staff results to completed tickets; other values are ignored
    pub status: Option<String>,
}

impl TicketQueryParams {
    pub fn wants_completed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_DONE)
    }
}

/// Customer fields embedded in a ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerSummaryDto {
    pub id: i64,
    pub address: String,
    pub full_name: String,
}

/// Employee fields embedded in a ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeSummaryDto {
    pub id: i64,
    pub specialty: String,
    pub full_name: String,
}

/// Response DTO for ticket, with customer and employee nested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketResponseDto {
    pub id: i64,
    pub customer: CustomerSummaryDto,
    /// `null` while the ticket is unassigned
    pub employee: Option<EmployeeSummaryDto>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<NaiveDate>,
}

impl From<TicketRow> for TicketResponseDto {
    fn from(row: TicketRow) -> Self {
        // LEFT JOIN: all three employee columns are set or none are
        let employee = match (row.employee_id, row.employee_specialty, row.employee_full_name) {
            (Some(id), Some(specialty), Some(full_name)) => Some(EmployeeSummaryDto {
                id,
                specialty,
                full_name,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            customer: CustomerSummaryDto {
                id: row.customer_id,
                address: row.customer_address,
                full_name: row.customer_full_name,
            },
            employee,
            description: row.description,
            emergency: row.emergency,
            date_completed: row.date_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> TicketRow {
        TicketRow {
            id: 3,
            description: "Leaky faucet".into(),
            emergency: false,
            date_completed: None,
            customer_id: 1,
            customer_user_id: "cust-1".into(),
            customer_address: "12 Elm St".into(),
            customer_full_name: "Ada Lovelace".into(),
            employee_id: None,
            employee_specialty: None,
            employee_full_name: None,
        }
    }

    #[test]
    fn test_unassigned_ticket_serializes_null_employee() {
        let value = serde_json::to_value(TicketResponseDto::from(row())).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "customer": { "id": 1, "address": "12 Elm St", "full_name": "Ada Lovelace" },
                "employee": null,
                "description": "Leaky faucet",
                "emergency": false,
                "date_completed": null
            })
        );
    }

    #[test]
    fn test_assigned_completed_ticket_nests_employee() {
        let mut r = row();
        r.employee_id = Some(7);
        r.employee_specialty = Some("Plumbing".into());
        r.employee_full_name = Some("Grace Hopper".into());
        r.date_completed = NaiveDate::from_ymd_opt(2024, 5, 17);

        let value = serde_json::to_value(TicketResponseDto::from(r)).unwrap();
        assert_eq!(
            value["employee"],
            json!({ "id": 7, "specialty": "Plumbing", "full_name": "Grace Hopper" })
        );
        assert_eq!(value["date_completed"], json!("2024-05-17"));
        // The account link is internal and never leaves the service
        assert!(value["customer"].get("user_id").is_none());
    }

    #[test]
    fn test_create_dto_requires_both_fields() {
        assert!(serde_json::from_value::<CreateTicketDto>(json!({ "description": "x" })).is_err());
        assert!(serde_json::from_value::<CreateTicketDto>(json!({ "emergency": true })).is_err());
        assert!(serde_json::from_value::<CreateTicketDto>(
            json!({ "description": "x", "emergency": "yes" })
        )
        .is_err());
    }

    #[test]
    fn test_create_dto_validation() {
        let ok = CreateTicketDto {
            description: "Broken heater".into(),
            emergency: true,
        };
        assert!(ok.validate().is_ok());

        let empty = CreateTicketDto {
            description: String::new(),
            emergency: false,
        };
        assert!(empty.validate().is_err());

        let too_long = CreateTicketDto {
            description: "a".repeat(2001),
            emergency: false,
        };
        assert!(too_long.validate().is_err());

        let blank = CreateTicketDto {
            description: "   ".into(),
            emergency: false,
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_assign_dto_validation() {
        assert!(AssignEmployeeDto { employee: 7 }.validate().is_ok());
        assert!(AssignEmployeeDto { employee: 0 }.validate().is_err());
    }

    #[test]
    fn test_only_done_status_narrows() {
        let done = TicketQueryParams {
            status: Some("done".into()),
        };
        let other = TicketQueryParams {
            status: Some("open".into()),
        };
        assert!(done.wants_completed());
        assert!(!other.wants_completed());
        assert!(!TicketQueryParams::default().wants_completed());
    }
}
