//! # Week Grid Module
//!
//! Seven day columns with one row per offered slot. Locked cells show a
//! padlock, reserved cells the booker's name and category, open cells a "+" button that
//! opens the booking dialog.

use chrono::NaiveDate;
use eframe::egui;
use shared::SlotStatus;

use crate::ui::app_state::AgendaApp;
use crate::ui::components::styling::colors;

const CELL_HEIGHT: f32 = 160.0;

impl AgendaApp {
    /// Render the weekly grid
    pub fn render_week_grid(&mut self, ui: &mut egui::Ui) {
        let week = self.week_days();
        let slots = self.time_slots();
        let spacing = 6.0;
        let cell_width = ((ui.available_width() - spacing * 6.0) / 7.0).max(80.0);
        let cell_size = egui::vec2(cell_width, CELL_HEIGHT);
        let mut activated: Option<(NaiveDate, String)> = None;

        egui::Grid::new("week_grid")
            .num_columns(7)
            .spacing([spacing, spacing])
            .min_col_width(cell_width)
            .max_col_width(cell_width)
            .show(ui, |ui| {
                for day in &week {
                    let weekday_color = if day.is_available_day { colors::RED_600 } else { colors::SLATE_400 };
                    let number_color = if day.is_today { colors::RED_600 } else { colors::SLATE_800 };
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(day.short_weekday.to_uppercase())
                            .size(11.0)
                            .strong()
                            .color(weekday_color));
                        let number = egui::RichText::new(day.date.format("%-d").to_string())
                            .size(28.0)
                            .strong()
                            .color(number_color);
                        ui.label(if day.is_today { number.underline() } else { number });
                    })
                    .response
                    .on_hover_text(day.label.as_str());
                }
                ui.end_row();

                for slot in &slots {
                    for day in &week {
                        match self.slot_status(day.date, &slot.label) {
                            SlotStatus::Locked => {
                                ui.add_sized(cell_size, egui::Label::new(
                                    egui::RichText::new("🔒").size(28.0).color(colors::SLATE_300),
                                ));
                            }
                            SlotStatus::Reserved(booking) => {
                                egui::Frame::none()
                                    .fill(colors::RED_600)
                                    .rounding(24.0)
                                    .inner_margin(egui::Margin::same(8.0))
                                    .show(ui, |ui| {
                                        ui.set_min_size(cell_size - egui::vec2(16.0, 16.0));
                                        ui.vertical_centered(|ui| {
                                            ui.add_space(24.0);
                                            ui.label(egui::RichText::new("✔").size(22.0).color(egui::Color32::WHITE));
                                            ui.label(egui::RichText::new(booking.name.to_uppercase())
                                                .strong()
                                                .color(egui::Color32::WHITE));
                                            ui.label(egui::RichText::new("RESERVADO")
                                                .size(10.0)
                                                .strong()
                                                .color(colors::RED_100));
                                            ui.label(egui::RichText::new(booking.ministracion_type.label())
                                                .size(10.0)
                                                .color(colors::RED_100));
                                        });
                                    });
                            }
                            SlotStatus::Open => {
                                let button = egui::Button::new(
                                    egui::RichText::new(format!("+\n{}", self.config.slot_display))
                                        .strong()
                                        .color(colors::RED_300),
                                )
                                .fill(egui::Color32::WHITE)
                                .stroke(egui::Stroke::new(2.0, colors::RED_100))
                                .rounding(24.0);

                                if ui.add_sized(cell_size, button).clicked() {
                                    activated = Some((day.date, slot.label.clone()));
                                }
                            }
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some((date, time)) = activated {
            self.open_slot(date, &time);
        }
    }
}
