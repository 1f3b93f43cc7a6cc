//! # UI Components Module
//!
//! - `styling` - global style and color palette
//! - `header` - logo, banner, week navigation and footer note
//! - `week_grid` - day columns and slot cells
//! - `booking_modal` - booking dialog

pub mod booking_modal;
pub mod header;
pub mod styling;
pub mod week_grid;

pub use styling::setup_agenda_style;
