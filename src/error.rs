use std::fmt;

/// Raised by [`crate::models::SeatTable`] when asked to touch a seat it does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("seat {seat} is outside the theatre (capacity {capacity})")]
    OutOfRange { seat: usize, capacity: usize },
}

/// Why a requested seat was refused. Not shown to the user, only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    NotANumber,
    OutOfRange,
    AlreadyBooked,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UnavailableReason::NotANumber => "not a number",
            UnavailableReason::OutOfRange => "out of range",
            UnavailableReason::AlreadyBooked => "already booked",
        };
        f.write_str(text)
    }
}

/// Rejections of a booking submission. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Please enter a valid Gmail address ending with {domain}.")]
    InvalidEmail { domain: String },

    #[error("You can only book between 1 and {max} seats.")]
    InvalidSeatCount { max: u32 },

    #[error("Please enter exactly {expected} seat numbers.")]
    SeatCountMismatch { expected: u32, found: usize },

    // Out-of-range and already-booked share one message
    #[error("Seat is not available.")]
    SeatUnavailable { seat: String, reason: UnavailableReason },

    #[error(transparent)]
    Seat(#[from] SeatError),
}

impl BookingError {
    /// Stable name of the failure, for logs and tests.
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::InvalidEmail { .. } => "InvalidEmail",
            BookingError::InvalidSeatCount { .. } => "InvalidSeatCount",
            BookingError::SeatCountMismatch { .. } => "SeatCountMismatch",
            BookingError::SeatUnavailable { .. } => "SeatUnavailable",
            BookingError::Seat(_) => "Seat",
        }
    }
}
