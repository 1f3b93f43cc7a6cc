//! # Calendar State Module
//!
//! State for the visible week: the reference date that anchors the grid and
//! the date the session considers "today".

use chrono::NaiveDate;
use log::info;

/// Calendar-specific state for week navigation and display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    /// Any date inside the visible week
    pub reference_date: NaiveDate,

    /// Today's date, kept in step with the local clock while the app runs
    pub today: NaiveDate,
}

impl CalendarState {
    /// Create calendar state showing the week that contains `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            reference_date: today,
            today,
        }
    }

    /// Record a new current date. Returns whether the date changed.
    pub fn set_today(&mut self, today: NaiveDate) -> bool {
        if self.today == today {
            return false;
        }
        info!("📅 Date changed from {} to {}", self.today, today);
        self.today = today;
        true
    }

    /// Move the reference date back to today's week
    pub fn go_to_today(&mut self) {
        self.reference_date = self.today;
        info!("📅 Returned to today's week: {}", self.today);
    }
}
