//! # Booking Modal
//!
//! Dialog shown while the booking flow is composing: slot heading, name
//! field, optional reason and the confirm button.

use eframe::egui;
use crate::ui::app_state::AgendaApp;
use crate::ui::components::styling::colors;

impl AgendaApp {
    /// Render the booking dialog when a slot is selected
    pub fn render_booking_modal(&mut self, ctx: &egui::Context) {
        let Some(slot) = self.booking_flow.selected_slot().cloned() else {
            return;
        };
        let heading = self
            .backend
            .calendar_service
            .slot_heading(slot.date, &slot.time)
            .to_uppercase();
        let logo_url = self.config.logo_url.clone();

        let mut open = true;
        let mut submit = false;

        egui::Window::new("Reservar Ministración")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([420.0, 420.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add(egui::Image::new(logo_url.as_str()).max_height(64.0));
                    ui.label(egui::RichText::new("RESERVAR MINISTRACIÓN")
                        .size(22.0)
                        .strong()
                        .color(colors::RED_700));
                    ui.label(egui::RichText::new(format!("📅 {}", heading))
                        .size(12.0)
                        .strong()
                        .color(colors::RED_600));
                });
                ui.add_space(16.0);

                if let Some(form) = self.booking_flow.form_mut() {
                    ui.label(egui::RichText::new("TU NOMBRE COMPLETO").size(11.0).strong().color(colors::RED_600));
                    let name_response = ui.add(
                        egui::TextEdit::singleline(&mut form.name)
                            .hint_text("ESCRIBE AQUÍ...")
                            .desired_width(f32::INFINITY),
                    );
                    if name_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }

                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("BREVE MOTIVO (OPCIONAL)").size(11.0).strong().color(colors::RED_600));
                    ui.add(
                        egui::TextEdit::multiline(&mut form.reason)
                            .hint_text("EJ. SALUD, FAMILIA...")
                            .desired_rows(2)
                            .desired_width(f32::INFINITY),
                    );
                }

                ui.add_space(16.0);
                let confirm = egui::Button::new(
                    egui::RichText::new("CONFIRMAR CUPO")
                        .size(17.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(colors::RED_600)
                .min_size(egui::vec2(ui.available_width(), 48.0));
                if ui.add(confirm).clicked() {
                    submit = true;
                }

                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(
                        "Al confirmar, este espacio será bloqueado automáticamente para tu atención.",
                    )
                    .size(10.0)
                    .color(colors::SLATE_400));
                });
            });

        if !open {
            self.cancel_booking();
        } else if submit {
            self.submit_booking();
        }
    }
}
