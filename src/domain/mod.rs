pub mod form;
pub mod store;
pub mod ticket;

pub use form::{DeleteConfirmation, Draft, DraftField, FormSession};
pub use store::TicketStore;
pub use ticket::{Rating, Ticket, TicketId, TicketStatus};
