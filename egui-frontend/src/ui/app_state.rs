//! # App State Module
//!
//! Central application state and the transitions driven by user interaction.
//!
//! ## Key Types:
//! - `AgendaApp` - owns the backend, the visible week and the booking flow
//!
//! ## Key Functions:
//! - `week_days()` / `slot_status()` - what the grid shows
//! - `open_slot()` / `cancel_booking()` / `submit_booking()` - booking flow
//! - `navigate_to_previous_week()` / `navigate_to_next_week()` / `go_to_today()`
//!
//! Every transition runs to completion synchronously and reports an outcome,
//! so the whole flow can be exercised without a rendering context.

use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, error, info, warn};
use shared::{SlotStatus, TimeSlot, WeekDay};

use crate::backend::domain::commands::bookings::CreateBookingCommand;
use crate::backend::domain::models::booking::{BookingError, BookingValidationError, SlotRejection};
use crate::backend::Backend;
use crate::config::AgendaConfig;
use crate::ui::state::{BookingFlow, CalendarState, OpenSlotOutcome, SelectedSlot, SubmitOutcome};

/// Main application struct for the egui agenda
pub struct AgendaApp {
    pub backend: Backend,
    pub config: AgendaConfig,

    /// Visible week
    pub calendar: CalendarState,

    /// Booking dialog state
    pub booking_flow: BookingFlow,
}

impl AgendaApp {
    /// Create a new session anchored on `today`
    pub fn new(config: AgendaConfig, today: NaiveDate) -> Result<Self> {
        info!("Initializing agenda session for {}", today);
        let backend = Backend::new(&config, today)?;

        Ok(Self {
            backend,
            config,
            calendar: CalendarState::new(today),
            booking_flow: BookingFlow::default(),
        })
    }

    /// The seven days of the visible week, Monday first
    pub fn week_days(&self) -> Vec<WeekDay> {
        self.backend
            .calendar_service
            .derive_week(self.calendar.reference_date, self.calendar.today)
    }

    pub fn time_slots(&self) -> Vec<TimeSlot> {
        self.config.time_slots()
    }

    /// Grid status for one cell. Unreadable storage locks the cell.
    pub fn slot_status(&self, date: NaiveDate, time: &str) -> SlotStatus {
        match self.backend.booking_service.slot_status(date, time) {
            Ok(status) => status,
            Err(e) => {
                error!("Failed to read slot status for {} {}: {}", date, time, e);
                SlotStatus::Locked
            }
        }
    }

    /// Idle -> Composing, only for an open slot on an available day
    pub fn open_slot(&mut self, date: NaiveDate, time: &str) -> OpenSlotOutcome {
        let rejection = rejection_for(self.backend.booking_service.slot_status(date, time));

        let result = match rejection {
            Some(rejection) => Err(rejection),
            None => self.booking_flow.begin(SelectedSlot {
                date,
                time: time.to_string(),
            }),
        };

        match result {
            Ok(()) => {
                info!("📝 Opened booking dialog for {} {}", date, time);
                OpenSlotOutcome::Opened
            }
            Err(rejection) => {
                debug!("📝 Ignored slot activation for {} {}: {}", date, time, rejection);
                OpenSlotOutcome::Ignored(rejection)
            }
        }
    }

    /// Composing -> Idle without creating a booking
    pub fn cancel_booking(&mut self) {
        if let Some(slot) = self.booking_flow.close() {
            info!("📝 Cancelled booking for {} {}", slot.date, slot.time);
        }
    }

    /// Composing -> Idle when the booking is created; stays Composing otherwise
    pub fn submit_booking(&mut self) -> SubmitOutcome {
        let (Some(slot), Some(form)) = (self.booking_flow.selected_slot(), self.booking_flow.form()) else {
            return SubmitOutcome::Rejected(BookingValidationError::NoSlotSelected);
        };
        let command = CreateBookingCommand {
            name: form.name.clone(),
            reason: form.reason.clone(),
            date: slot.date,
            start_time: slot.time.clone(),
        };

        match self.backend.booking_service.create_booking(command) {
            Ok(result) => {
                self.booking_flow.close();
                info!("📝 {}: {}", result.success_message, result.booking.id);
                SubmitOutcome::Created(result.booking)
            }
            Err(BookingError::Validation(reason)) => {
                debug!("📝 Submission rejected: {}", reason);
                SubmitOutcome::Rejected(reason)
            }
            Err(BookingError::Storage(e)) => {
                warn!("📝 Failed to store booking: {}", e);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn navigate_to_previous_week(&mut self) {
        self.calendar.reference_date = self
            .backend
            .calendar_service
            .previous_week(self.calendar.reference_date);
    }

    pub fn navigate_to_next_week(&mut self) {
        self.calendar.reference_date = self
            .backend
            .calendar_service
            .next_week(self.calendar.reference_date);
    }

    /// Follow the clock past midnight; the visible week is left alone
    pub fn refresh_today(&mut self, today: NaiveDate) {
        self.calendar.set_today(today);
    }

    pub fn go_to_today(&mut self) {
        self.calendar.go_to_today();
    }

    /// Title of the navigation bar, e.g. "octubre 2026"
    pub fn month_year_label(&self) -> String {
        self.backend
            .calendar_service
            .month_year_label(self.calendar.reference_date)
    }
}

/// Why a slot with the given status cannot be opened, if it cannot
fn rejection_for(status: Result<SlotStatus>) -> Option<SlotRejection> {
    match status {
        Ok(SlotStatus::Locked) => Some(SlotRejection::UnavailableDay),
        Ok(SlotStatus::Reserved(_)) => Some(SlotRejection::AlreadyReserved),
        Ok(SlotStatus::Open) => None,
        Err(e) => {
            error!("Failed to read slot status: {}", e);
            Some(SlotRejection::StorageUnavailable)
        }
    }
}
