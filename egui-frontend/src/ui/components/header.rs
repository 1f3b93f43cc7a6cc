//! # Header Module
//!
//! Logo, title, the availability banner and the week navigation bar.

use eframe::egui;
use crate::ui::app_state::AgendaApp;
use crate::ui::components::styling::colors;

impl AgendaApp {
    /// Render the header with the group's logo
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.add(egui::Image::new(self.config.logo_url.as_str()).max_height(96.0));
            ui.label(egui::RichText::new("AGENDA DE MINISTRACIONES")
                .size(22.0)
                .strong()
                .color(colors::RED_700));
            ui.label(egui::RichText::new("GRUPO DE CONEXIÓN")
                .size(11.0)
                .strong()
                .color(colors::RED_600));
            ui.add_space(12.0);
        });
    }

    /// Render the "available hours" banner
    pub fn render_info_banner(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(colors::RED_50)
            .stroke(egui::Stroke::new(2.0, colors::RED_100))
            .rounding(24.0)
            .inner_margin(egui::Margin::symmetric(24.0, 18.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("📅").size(30.0));
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new("HORARIOS DISPONIBLES")
                            .size(18.0)
                            .strong()
                            .color(colors::RED_800));
                        ui.label(egui::RichText::new(format!(
                            "Lunes y Martes de {} a 10:00 PM",
                            self.config.slot_display
                        ))
                        .strong()
                        .color(colors::RED_600));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new("SOLO 1 CUPO POR DÍA")
                            .strong()
                            .color(colors::RED_700));
                    });
                });
            });
        ui.add_space(16.0);
    }

    /// Render previous/next week buttons, the month title and "back to today"
    pub fn render_week_navigation(&mut self, ui: &mut egui::Ui) {
        let title = self.month_year_label().to_uppercase();

        ui.horizontal(|ui| {
            if ui.button(egui::RichText::new("◀").strong().color(colors::RED_600)).clicked() {
                self.navigate_to_previous_week();
            }
            ui.label(egui::RichText::new(title)
                .size(17.0)
                .strong()
                .color(colors::SLATE_800));
            if ui.button(egui::RichText::new("▶").strong().color(colors::RED_600)).clicked() {
                self.navigate_to_next_week();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.link(egui::RichText::new("VOLVER A HOY").strong().color(colors::RED_600)).clicked() {
                    self.go_to_today();
                }
            });
        });
        ui.add_space(8.0);
    }

    /// Render the note below the grid
    pub fn render_footer_note(&self, ui: &mut egui::Ui) {
        ui.add_space(16.0);
        egui::Frame::none()
            .fill(colors::SLATE_50)
            .rounding(18.0)
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(format!(
                    "ℹ Importante: Solo se habilitan los lunes y martes a las {}. Si el espacio aparece con un nombre, \
                     ya ha sido reservado por otro miembro del grupo. Por favor, busca la fecha disponible más cercana \
                     para tu ministración.",
                    self.config.slot_display
                ))
                .italics()
                .size(12.0)
                .color(colors::SLATE_400));
            });
    }
}
