use tracing::{info, warn};

use crate::config::TheatreConfig;
use crate::error::BookingError;
use crate::models::{BookingConfirmation, BookingRequest, Movie, SeatTable};
use crate::services::payment::PaymentDesk;
use crate::services::validation::validate_request;
use crate::AppState;

/// Sole owner of the catalog: every booking goes through [`BookingService::submit`].
#[derive(Debug)]
pub struct BookingService {
    state: AppState,
    payments: PaymentDesk,
}

impl BookingService {
    pub fn new(state: AppState) -> Self {
        let payments = PaymentDesk::new(state.rules.ticket_price);
        Self { state, payments }
    }

    pub fn rules(&self) -> &TheatreConfig {
        &self.state.rules
    }

    pub fn seats(&self, movie: Movie) -> &SeatTable {
        self.state.catalog.seats(movie)
    }

    pub fn booked_seats(&self, movie: Movie) -> String {
        self.seats(movie).list_booked()
    }

    /// Validates the request and, only if every check passes, books the seats and takes payment.
    pub fn submit(&mut self, request: &BookingRequest) -> Result<BookingConfirmation, BookingError> {
        let table = self.state.catalog.seats(request.movie);
        let booking = validate_request(request, table, &self.state.rules).map_err(|e| {
            warn!("Booking for {} rejected ({}): {:?}", request.movie, e.kind(), e);
            e
        })?;

        self.state
            .catalog
            .seats_mut(request.movie)
            .book_all(&booking.seats)?;

        let payment = self.payments.charge(request.payment, booking.seat_count);
        info!(
            "Booked seats {:?} for {} ({} now taken)",
            booking.seats,
            request.movie,
            self.seats(request.movie).booked_count()
        );

        Ok(BookingConfirmation {
            email: request.email.clone(),
            movie: request.movie,
            seat_text: request.seat_numbers.clone(),
            seats: booking.seats,
            payment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentMethod;

    fn service() -> BookingService {
        BookingService::new(AppState::new(TheatreConfig::default()))
    }

    fn request(movie: Movie, count: &str, seats: &str) -> BookingRequest {
        BookingRequest {
            email: "a@gmail.com".to_string(),
            movie,
            seat_count: count.to_string(),
            seat_numbers: seats.to_string(),
            payment: PaymentMethod::Upi,
        }
    }

    #[test]
    fn test_submit_books_and_charges() {
        let mut service = service();
        let confirmation = service.submit(&request(Movie::Leo, "2", "5 6")).unwrap();

        assert_eq!(confirmation.seats, vec![5, 6]);
        assert_eq!(confirmation.payment.amount, 240.0);
        assert_eq!(service.booked_seats(Movie::Leo), "5 6");
    }

    #[test]
    fn test_rebooking_is_rejected_without_changes() {
        let mut service = service();
        service.submit(&request(Movie::Leo, "1", "5")).unwrap();

        let err = service.submit(&request(Movie::Leo, "2", "4 5")).unwrap_err();
        assert_eq!(err.kind(), "SeatUnavailable");
        assert_eq!(service.booked_seats(Movie::Leo), "5");
    }

    #[test]
    fn test_same_seat_in_other_movie_is_free() {
        let mut service = service();
        service.submit(&request(Movie::Leo, "1", "5")).unwrap();
        service.submit(&request(Movie::Amaran, "1", "5")).unwrap();

        assert_eq!(service.booked_seats(Movie::Amaran), "5");
        assert_eq!(service.booked_seats(Movie::Manmadhan), "");
    }

    #[test]
    fn test_duplicate_seat_in_one_request() {
        // Both tokens are free at check time; the seat ends up booked once
        let mut service = service();
        let confirmation = service.submit(&request(Movie::Leo, "2", "9 9")).unwrap();

        assert_eq!(confirmation.payment.amount, 240.0);
        assert_eq!(service.seats(Movie::Leo).booked_count(), 1);
    }
}
