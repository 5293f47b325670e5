//! Desktop UI module
//!
//! Provides the single booking window shown by the binary.

mod booking_window;

pub use booking_window::BookingWindow;
