//! Checks a booking request against the rules and one seat table.
//!
//! Nothing in here mutates state, so a rejected request can never leave a
//! partial booking behind.

use crate::config::TheatreConfig;
use crate::error::{BookingError, UnavailableReason};
use crate::models::{BookingRequest, SeatTable, ValidatedBooking};

/// Runs every check in order and stops at the first failure.
pub fn validate_request(
    request: &BookingRequest,
    table: &SeatTable,
    rules: &TheatreConfig,
) -> Result<ValidatedBooking, BookingError> {
    validate_email(&request.email, &rules.email_domain)?;
    let seat_count = parse_seat_count(&request.seat_count, rules.max_seats_per_booking)?;
    let tokens = split_seat_list(&request.seat_numbers, seat_count)?;

    let seats = tokens
        .into_iter()
        .map(|token| check_seat(token, table))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedBooking { seat_count, seats })
}

pub fn validate_email(email: &str, domain: &str) -> Result<(), BookingError> {
    if email.ends_with(domain) {
        Ok(())
    } else {
        Err(BookingError::InvalidEmail {
            domain: domain.to_string(),
        })
    }
}

pub fn parse_seat_count(text: &str, max: u32) -> Result<u32, BookingError> {
    text.trim()
        .parse::<u32>()
        .ok()
        .filter(|count| (1..=max).contains(count))
        .ok_or(BookingError::InvalidSeatCount { max })
}

fn split_seat_list(text: &str, expected: u32) -> Result<Vec<&str>, BookingError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() == expected as usize {
        Ok(tokens)
    } else {
        Err(BookingError::SeatCountMismatch {
            expected,
            found: tokens.len(),
        })
    }
}

fn check_seat(token: &str, table: &SeatTable) -> Result<usize, BookingError> {
    let unavailable = |reason| BookingError::SeatUnavailable {
        seat: token.to_string(),
        reason,
    };

    // Signed parse so "-1" is reported as out of range, not as garbage
    let number: i64 = token
        .parse()
        .map_err(|_| unavailable(UnavailableReason::NotANumber))?;
    let seat = usize::try_from(number)
        .ok()
        .filter(|&seat| seat < table.capacity())
        .ok_or_else(|| unavailable(UnavailableReason::OutOfRange))?;

    if table.is_available(seat) {
        Ok(seat)
    } else {
        Err(unavailable(UnavailableReason::AlreadyBooked))
    }
}
