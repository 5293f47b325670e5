use std::collections::VecDeque;
use tracing::debug;

use crate::error::BookingError;
use crate::models::{BookingConfirmation, BookingRequest, Movie, PaymentMethod};
use crate::services::BookingService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A modal message waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "Message",
            NoticeKind::Error => "Error",
        }
    }
}

/// What is currently typed and selected in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub email: String,
    pub movie: Movie,
    pub seat_count: String,
    pub seat_numbers: String,
    pub payment: PaymentMethod,
}

impl BookingForm {
    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            email: self.email.clone(),
            movie: self.movie,
            seat_count: self.seat_count.clone(),
            seat_numbers: self.seat_numbers.clone(),
            payment: self.payment,
        }
    }

    // Selections survive a successful booking, typed text does not
    pub fn clear_inputs(&mut self) {
        self.email.clear();
        self.seat_count.clear();
        self.seat_numbers.clear();
    }
}

/// Event handlers for the booking window, usable without a display.
#[derive(Debug)]
pub struct BookingFormController {
    service: BookingService,
    form: BookingForm,
    booked_label: String,
    notices: VecDeque<Notice>,
}

impl BookingFormController {
    pub fn new(service: BookingService) -> Self {
        let mut controller = Self {
            service,
            form: BookingForm::default(),
            booked_label: String::new(),
            notices: VecDeque::new(),
        };
        controller.refresh_booked_seats();
        controller
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    pub fn service(&self) -> &BookingService {
        &self.service
    }

    pub fn booked_seats_label(&self) -> &str {
        &self.booked_label
    }

    /// Movie selector changed.
    pub fn select_movie(&mut self, movie: Movie) {
        debug!("Movie selected: {}", movie);
        self.form.movie = movie;
        self.refresh_booked_seats();
    }

    fn refresh_booked_seats(&mut self) {
        let booked = self.service.booked_seats(self.form.movie);
        self.booked_label = if booked.is_empty() {
            "Booked Seats: None".to_string()
        } else {
            format!("Booked Seats: {}", booked)
        };
        debug!("{} -> {}", self.form.movie, self.booked_label);
    }

    /// "Book Tickets" pressed.
    pub fn submit(&mut self) -> Result<BookingConfirmation, BookingError> {
        let request = self.form.to_request();
        match self.service.submit(&request) {
            Ok(confirmation) => {
                self.notices.push_back(Notice::info(confirmation.payment.message()));
                self.notices.push_back(Notice::info(confirmation.message()));
                self.refresh_booked_seats();
                self.form.clear_inputs();
                Ok(confirmation)
            }
            Err(e) => {
                self.notices.push_back(Notice::error(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}
