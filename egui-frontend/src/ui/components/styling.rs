//! # Styling Module
//!
//! Global egui style and the red/slate palette used across the agenda.

use eframe::egui;

/// Configure global egui styling
pub fn setup_agenda_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.window_fill = egui::Color32::WHITE;
        style.visuals.panel_fill = egui::Color32::WHITE;
        style.visuals.button_frame = true;

        // In egui 0.28, text edits use extreme_bg_color
        style.visuals.extreme_bg_color = colors::SLATE_50;
        style.visuals.selection.bg_fill = colors::RED_600;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);

        style
    });
}

pub mod colors {
    use eframe::egui::Color32;

    pub const RED_50: Color32 = Color32::from_rgb(254, 242, 242);
    pub const RED_100: Color32 = Color32::from_rgb(254, 226, 226);
    pub const RED_300: Color32 = Color32::from_rgb(252, 165, 165);
    pub const RED_600: Color32 = Color32::from_rgb(220, 38, 38);
    pub const RED_700: Color32 = Color32::from_rgb(185, 28, 28);
    pub const RED_800: Color32 = Color32::from_rgb(153, 27, 27);

    pub const SLATE_50: Color32 = Color32::from_rgb(248, 250, 252);
    pub const SLATE_300: Color32 = Color32::from_rgb(203, 213, 225);
    pub const SLATE_400: Color32 = Color32::from_rgb(148, 163, 184);
    pub const SLATE_800: Color32 = Color32::from_rgb(30, 41, 59);
}
