//! # Agenda Configuration
//!
//! Fixed scheduling parameters for the group's agenda. Everything here is
//! built in code; the agenda reads no configuration files or environment
//! variables.

use serde::{Deserialize, Serialize};
use shared::TimeSlot;

pub const LOGO_URL: &str = "https://i.postimg.cc/63ny6hs7/Logo-G-conexion-2023PNG.png";

/// Scheduling parameters shared by the domain services and the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaConfig {
    /// Hour of the only offered slot
    pub slot_hour: u32,
    /// Start time of the slot in HH:mm format (booking lookup key)
    pub slot_start: String,
    /// End time stored on every new booking
    pub slot_end: String,
    /// 12-hour label shown on open slot buttons
    pub slot_display: String,
    /// Reason stored when the form's reason field is left empty
    pub default_reason: String,
    /// Remote logo image shown in the header and the booking dialog
    pub logo_url: String,
    /// Whether the session starts with an example booking on this week's Monday
    pub seed_example_booking: bool,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            slot_hour: 21,
            slot_start: "21:00".to_string(),
            slot_end: "22:00".to_string(),
            slot_display: "9:00 PM".to_string(),
            default_reason: "Ministración".to_string(),
            logo_url: LOGO_URL.to_string(),
            seed_example_booking: true,
        }
    }
}

impl AgendaConfig {
    /// The time slots offered on each available day
    pub fn time_slots(&self) -> Vec<TimeSlot> {
        vec![TimeSlot {
            hour: self.slot_hour,
            label: self.slot_start.clone(),
        }]
    }
}
