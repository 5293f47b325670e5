pub mod booking;
pub mod movie;
pub mod payment;
pub mod seat;

pub use booking::{BookingConfirmation, BookingRequest, PaymentReceipt, ValidatedBooking};
pub use movie::{Movie, ParseMovieError};
pub use payment::{ParsePaymentMethodError, PaymentMethod};
pub use seat::SeatTable;
