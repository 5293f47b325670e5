//! Main booking window
//!
//! Draws the form and forwards every user action to the
//! [`BookingFormController`]. Holds no booking state of its own.

use eframe::egui::{self, Align2, Color32, RichText};

use crate::controllers::{BookingFormController, NoticeKind};
use crate::models::{Movie, PaymentMethod};

const FIELD_WIDTH: f32 = 300.0;
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 60, 60);

pub struct BookingWindow {
    header: String,
    controller: BookingFormController,
}

impl BookingWindow {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        header: String,
        controller: BookingFormController,
    ) -> Self {
        tracing::info!("Booking window ready");
        Self { header, controller }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let max_seats = self.controller.service().rules().max_seats_per_booking;

        egui::Grid::new("booking_form")
            .num_columns(2)
            .spacing([20.0, 12.0])
            .show(ui, |ui| {
                ui.label("Enter your Gmail:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.controller.form_mut().email)
                        .desired_width(FIELD_WIDTH),
                );
                ui.end_row();

                ui.label("Select a Movie:");
                let mut movie = self.controller.form().movie;
                egui::ComboBox::from_id_source("movie")
                    .selected_text(movie.title())
                    .width(FIELD_WIDTH)
                    .show_ui(ui, |ui| {
                        for option in Movie::ALL {
                            ui.selectable_value(&mut movie, option, option.title());
                        }
                    });
                if movie != self.controller.form().movie {
                    self.controller.select_movie(movie);
                }
                ui.end_row();

                ui.label(format!("Enter number of seats (1-{}):", max_seats));
                ui.add(
                    egui::TextEdit::singleline(&mut self.controller.form_mut().seat_count)
                        .desired_width(FIELD_WIDTH),
                );
                ui.end_row();

                ui.label("Enter seat numbers (space-separated):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.controller.form_mut().seat_numbers)
                        .desired_width(FIELD_WIDTH),
                );
                ui.end_row();

                ui.label("Select Payment Method:");
                let form = self.controller.form_mut();
                egui::ComboBox::from_id_source("payment")
                    .selected_text(form.payment.label())
                    .width(FIELD_WIDTH)
                    .show_ui(ui, |ui| {
                        for option in PaymentMethod::ALL {
                            ui.selectable_value(&mut form.payment, option, option.label());
                        }
                    });
                ui.end_row();
            });

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui
                .add_sized([FIELD_WIDTH, 30.0], egui::Button::new("Book Tickets"))
                .clicked()
            {
                // Outcome is queued as a notice by the controller
                let _ = self.controller.submit();
            }

            ui.add_space(8.0);
            if ui.add_sized([80.0, 25.0], egui::Button::new("Exit")).clicked() {
                tracing::info!("Exit pressed");
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }

            ui.add_space(8.0);
            ui.label(self.controller.booked_seats_label());
        });
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.controller.current_notice() else {
            return;
        };
        let title = notice.title();
        let kind = notice.kind;
        let message = notice.message.clone();

        let mut dismissed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match kind {
                    NoticeKind::Error => ui.colored_label(ERROR_COLOR, &message),
                    NoticeKind::Info => ui.label(&message),
                };
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.controller.dismiss_notice();
        }
    }
}

impl eframe::App for BookingWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&self.header).size(20.0).strong());
            });
            ui.add_space(20.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Ruby Cinemas").size(16.0).strong());
            });
        });

        // A pending notice blocks the form until acknowledged
        let modal_open = self.controller.current_notice().is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.add_enabled_ui(!modal_open, |ui| self.show_form(ui));
        });

        self.show_notice(ctx);
    }
}
