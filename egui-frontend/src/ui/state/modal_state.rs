//! # Booking Modal State Module
//!
//! State machine behind the booking dialog:
//!
//! ```text
//! Idle --open_slot--> Composing --submit (valid name)--> Idle
//!                     Composing --cancel--------------> Idle
//! ```
//!
//! A rejected submit leaves the flow in `Composing` with the typed input intact.

use chrono::NaiveDate;
use shared::Booking;

use crate::backend::domain::models::booking::{BookingValidationError, SlotRejection};

/// The (date, start time) pair targeted by the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSlot {
    pub date: NaiveDate,
    pub time: String,
}

/// Booking form field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFormState {
    pub name: String,
    pub reason: String,
}

impl BookingFormState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Booking dialog lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingFlow {
    /// No dialog shown
    #[default]
    Idle,
    /// Dialog open for `slot` with editable `form`
    Composing {
        slot: SelectedSlot,
        form: BookingFormState,
    },
}

impl BookingFlow {
    pub fn is_open(&self) -> bool {
        matches!(self, BookingFlow::Composing { .. })
    }

    pub fn selected_slot(&self) -> Option<&SelectedSlot> {
        match self {
            BookingFlow::Composing { slot, .. } => Some(slot),
            BookingFlow::Idle => None,
        }
    }

    pub fn form(&self) -> Option<&BookingFormState> {
        match self {
            BookingFlow::Composing { form, .. } => Some(form),
            BookingFlow::Idle => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut BookingFormState> {
        match self {
            BookingFlow::Composing { form, .. } => Some(form),
            BookingFlow::Idle => None,
        }
    }

    /// Enter `Composing` with an empty form; fails if a dialog is already open
    pub fn begin(&mut self, slot: SelectedSlot) -> Result<(), SlotRejection> {
        if self.is_open() {
            return Err(SlotRejection::DialogOpen);
        }
        *self = BookingFlow::Composing {
            slot,
            form: BookingFormState::new(),
        };
        Ok(())
    }

    /// Return to `Idle`, dropping the selected slot and any typed input
    pub fn close(&mut self) -> Option<SelectedSlot> {
        match std::mem::take(self) {
            BookingFlow::Composing { slot, .. } => Some(slot),
            BookingFlow::Idle => None,
        }
    }
}

/// What happened when a slot was activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenSlotOutcome {
    Opened,
    Ignored(SlotRejection),
}

/// What happened when the booking form was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Booking),
    Rejected(BookingValidationError),
    /// Storage refused the booking; the dialog stays open
    Failed,
}
