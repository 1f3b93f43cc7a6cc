//! # App Coordinator Module
//!
//! The egui update loop. Each frame:
//! 1. Sync "today" with the local clock and apply the agenda style
//! 2. Handle global input (ESC closes the booking dialog)
//! 3. Render header, banner, navigation, grid and footer
//! 4. Render the booking dialog when a slot is selected

use eframe::egui;
use crate::ui::app_state::AgendaApp;
use crate::ui::*;

impl eframe::App for AgendaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_today(chrono::Local::now().date_naive());
        setup_agenda_style(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.cancel_booking();
        }

        egui::TopBottomPanel::top("agenda_header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_info_banner(ui);
                self.render_week_navigation(ui);
                self.render_week_grid(ui);
                self.render_footer_note(ui);
            });
        });

        self.render_booking_modal(ctx);
    }
}
