//! payment.rs
//!
//! Counter-side payment. There is no gateway: a payment always succeeds and
//! only produces a receipt for the confirmation dialog.
//!
//! Key pieces:
//! 1.  **PaymentDesk**: holds the flat ticket price and turns a seat count
//!     plus the chosen method into a receipt.
//! 2.  **PaymentReceipt** (in `models`): amount and method, rendered as the
//!     "Payment of ... successful!" message.

use tracing::info;

use crate::models::{PaymentMethod, PaymentReceipt};

#[derive(Debug, Clone)]
pub struct PaymentDesk {
    /// Flat price of one seat, no tiers and no tax.
    ticket_price: f64,
}

impl PaymentDesk {
    pub fn new(ticket_price: f64) -> Self {
        Self { ticket_price }
    }

    pub fn ticket_price(&self) -> f64 {
        self.ticket_price
    }

    /// Total for `seat_count` seats.
    pub fn quote(&self, seat_count: u32) -> f64 {
        f64::from(seat_count) * self.ticket_price
    }

    /// Takes payment for `seat_count` seats.
    pub fn charge(&self, method: PaymentMethod, seat_count: u32) -> PaymentReceipt {
        let amount = self.quote(seat_count);
        info!("Payment of {:.2} via {} accepted for {} seats", amount, method, seat_count);
        PaymentReceipt { method, amount }
    }
}
