//! Repair service tickets.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/tickets` | Customer | Submit a ticket |
//! | GET | `/api/tickets` | Yes | List tickets (staff: all, `?status=done`; customers: own) |
//! | GET | `/api/tickets/{id}` | Yes | Get a ticket |
//! | PUT | `/api/tickets/{id}` | Staff | Assign an employee |
//! | DELETE | `/api/tickets/{id}` | Yes | Delete a ticket |
//!
//! Assigning an employee is restricted to staff. Customers only read and delete
//! their own tickets; anyone else's ticket answers 404.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgTicketRepository;
pub use services::TicketService;
