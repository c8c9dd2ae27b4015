use thiserror::Error;

pub type Result<T> = std::result::Result<T, HelpdeskError>;

#[derive(Debug, Error)]
pub enum HelpdeskError {
    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("Cannot rate ticket {id} while its status is {status}")]
    TicketNotCompleted { id: String, status: String },

    #[error("Invalid ticket ID format: {0}")]
    InvalidTicketId(String),

    #[error("Invalid ticket status: {0}")]
    InvalidStatus(String),

    #[error("No draft in progress")]
    NoActiveDraft,
}
