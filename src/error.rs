use thiserror::Error;

/// Caller-facing outcomes of ledger operations. Every variant is expected
/// and recoverable; the presentation layer renders a message and re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("customer id must be non-empty and alphanumeric")]
    InvalidCustomerId,

    #[error("customer name must be non-empty, letters and spaces only")]
    InvalidCustomerName,

    #[error("unknown movie: {0}")]
    InvalidMovie(String),

    #[error("unknown showtime: {0}")]
    InvalidShowtime(String),

    #[error("ticket count must be a whole number between 1 and {max}")]
    InvalidTicketCount { max: u32 },

    #[error("only {available} seats available")]
    InsufficientSeats { available: u32 },

    #[error("no booking found for {0}")]
    NotFound(String),
}
