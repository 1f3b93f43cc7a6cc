use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reserved ministración slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Opaque unique identifier (UUID v4)
    pub id: String,
    /// Display name of the person who reserved the slot
    pub name: String,
    /// Contact email, not collected by the booking form
    pub email: String,
    /// Free-text reason, "Ministración" when left blank
    pub reason: String,
    /// Calendar date of the appointment (serialized as YYYY-MM-DD)
    pub date: NaiveDate,
    /// Start time in HH:mm format
    pub start_time: String,
    /// End time in HH:mm format
    pub end_time: String,
    /// Category of the appointment
    #[serde(rename = "type")]
    pub ministracion_type: MinistracionType,
}

impl Booking {
    /// Whether this booking occupies the given (date, start time) slot
    pub fn occupies(&self, date: NaiveDate, start_time: &str) -> bool {
        self.date == date && self.start_time == start_time
    }
}

/// Category of a ministración appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinistracionType {
    #[default]
    Personal,
    Familiar,
    Sanidad,
    Liberacion,
}

impl MinistracionType {
    /// Human-readable label shown to group members
    pub fn label(&self) -> &'static str {
        match self {
            MinistracionType::Personal => "Cuidado Personal",
            MinistracionType::Familiar => "Restauración Familiar",
            MinistracionType::Sanidad => "Sanidad Interior",
            MinistracionType::Liberacion => "Ministración de Liberación",
        }
    }
}

impl fmt::Display for MinistracionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let key = match self {
            MinistracionType::Personal => "personal",
            MinistracionType::Familiar => "familiar",
            MinistracionType::Sanidad => "sanidad",
            MinistracionType::Liberacion => "liberacion",
        };
        write!(f, "{}", key)
    }
}

/// A bookable time window offered on available days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub hour: u32,
    /// Start time in HH:mm format, used as the booking lookup key
    pub label: String,
}

/// One column of the visible week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    pub date: NaiveDate,
    /// Localized short label, e.g. "lun 12"
    pub label: String,
    /// Localized abbreviated weekday, e.g. "lun"
    pub short_weekday: String,
    pub is_today: bool,
    /// Monday or Tuesday
    pub is_available_day: bool,
}

/// Booking status of a single (day, slot) cell in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    /// The day does not offer the slot
    Locked,
    /// Someone already reserved the slot
    Reserved(Booking),
    /// The slot can be booked
    Open,
}
