#[cfg(test)]
mod in_memory;
mod ticket_repository;

#[cfg(test)]
pub use in_memory::InMemoryTicketRepository;
pub use ticket_repository::{PgTicketRepository, TicketRepository};
