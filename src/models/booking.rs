use serde::Serialize;

use super::{Movie, PaymentMethod};

/// One press of "Book Tickets": the raw form text plus the two selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub email: String,
    pub movie: Movie,
    pub seat_count: String,
    pub seat_numbers: String,
    pub payment: PaymentMethod,
}

/// A request that passed every check, with the seat list parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub seat_count: u32,
    pub seats: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: f64,
}

impl PaymentReceipt {
    pub fn message(&self) -> String {
        format!("Payment of ₹{:.2} via {} successful!", self.amount, self.method)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub email: String,
    pub movie: Movie,
    /// Seat text exactly as typed.
    pub seat_text: String,
    pub seats: Vec<usize>,
    pub payment: PaymentReceipt,
}

impl BookingConfirmation {
    pub fn message(&self) -> String {
        format!(
            "Booking confirmed for {} for movie: {} at seats: {}",
            self.email, self.movie, self.seat_text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let confirmation = BookingConfirmation {
            email: "a@gmail.com".to_string(),
            movie: Movie::Leo,
            seat_text: "5 6".to_string(),
            seats: vec![5, 6],
            payment: PaymentReceipt {
                method: PaymentMethod::Upi,
                amount: 240.0,
            },
        };
        assert_eq!(confirmation.payment.message(), "Payment of ₹240.00 via UPI successful!");
        assert_eq!(
            confirmation.message(),
            "Booking confirmed for a@gmail.com for movie: LEO at seats: 5 6"
        );
    }
}
