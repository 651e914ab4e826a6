mod customer;
mod employee;
mod ticket;

pub use customer::Customer;
pub use employee::Employee;
pub use ticket::{NewTicket, TicketRow, TicketScope};
