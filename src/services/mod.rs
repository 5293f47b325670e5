pub mod booking;
pub mod payment;
pub mod validation;

pub use booking::BookingService;
pub use payment::PaymentDesk;
pub use validation::validate_request;
