//! Booking service domain logic for the agenda.
//!
//! ## Key Responsibilities
//!
//! - **Slot Lookup**: Finding the booking that occupies a (date, start time) pair
//! - **Slot Status**: Classifying a grid cell as locked, reserved or open
//! - **Booking Creation**: Validating a submission and appending the new booking
//!
//! ## Business Rules
//!
//! - Only Mondays and Tuesdays offer the slot
//! - The name must not be empty after trimming
//! - An empty reason is replaced with the configured default ("Ministración")
//! - End time and category are fixed ("22:00", personal)
//! - Bookings are never updated or deleted
//!
//! One booking per slot is gated by the caller before it opens the booking
//! form (see `slot_status`); creation itself does not reject occupied slots.

use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info};
use shared::{Booking, MinistracionType, SlotStatus};
use uuid::Uuid;

use crate::backend::domain::calendar::CalendarService;
use crate::backend::domain::commands::bookings::{CreateBookingCommand, CreateBookingResult};
use crate::backend::domain::models::booking::{BookingError, BookingValidationError};
use crate::backend::storage::BookingStorage;
use crate::config::AgendaConfig;

/// Service for looking up and creating bookings
#[derive(Debug, Clone)]
pub struct BookingService<S: BookingStorage> {
    storage: S,
    calendar_service: CalendarService,
    slot_end: String,
    default_reason: String,
}

impl<S: BookingStorage> BookingService<S> {
    /// Create a new BookingService over the given storage
    pub fn new(storage: S, calendar_service: CalendarService, config: &AgendaConfig) -> Self {
        Self {
            storage,
            calendar_service,
            slot_end: config.slot_end.clone(),
            default_reason: config.default_reason.clone(),
        }
    }

    pub fn booking_count(&self) -> Result<usize> {
        self.storage.count_bookings()
    }

    /// Booking occupying the (date, start time) pair, if any
    pub fn find_booking(&self, date: NaiveDate, start_time: &str) -> Result<Option<Booking>> {
        self.storage.find_booking(date, start_time)
    }

    /// Classify a grid cell. Day eligibility is checked before the lookup.
    pub fn slot_status(&self, date: NaiveDate, start_time: &str) -> Result<SlotStatus> {
        if !self.calendar_service.is_available_day(date) {
            return Ok(SlotStatus::Locked);
        }

        Ok(match self.find_booking(date, start_time)? {
            Some(booking) => SlotStatus::Reserved(booking),
            None => SlotStatus::Open,
        })
    }

    /// Check a submission against the booking rules without storing anything
    pub fn validate(&self, command: &CreateBookingCommand) -> Result<(), BookingValidationError> {
        if command.name.trim().is_empty() {
            return Err(BookingValidationError::EmptyName);
        }
        if !self.calendar_service.is_available_day(command.date) {
            return Err(BookingValidationError::UnavailableDay(command.date));
        }
        Ok(())
    }

    /// Create and append a new booking
    pub fn create_booking(&mut self, command: CreateBookingCommand) -> Result<CreateBookingResult, BookingError> {
        debug!("📝 BOOKING: Create requested for {} {}", command.date, command.start_time);
        self.validate(&command)?;

        let reason = if command.reason.is_empty() {
            self.default_reason.clone()
        } else {
            command.reason
        };

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            name: command.name,
            email: String::new(),
            reason,
            date: command.date,
            start_time: command.start_time,
            end_time: self.slot_end.clone(),
            ministracion_type: MinistracionType::Personal,
        };

        self.storage.store_booking(&booking)?;

        info!("📝 BOOKING: Reserved {} {} for {} ({})", booking.date, booking.start_time, booking.name, booking.id);

        Ok(CreateBookingResult {
            booking,
            success_message: "Cupo reservado".to_string(),
        })
    }

    /// Store the example booking shown on the Monday of the current week
    pub fn seed_example_booking(&mut self, today: NaiveDate, start_time: &str) -> Result<Booking, BookingError> {
        let monday = self.calendar_service.start_of_week(today);
        let result = self.create_booking(CreateBookingCommand {
            name: "Ejemplo de Reserva".to_string(),
            reason: self.default_reason.clone(),
            date: monday,
            start_time: start_time.to_string(),
        })?;
        Ok(result.booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::InMemoryBookingRepository;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_test_service() -> BookingService<InMemoryBookingRepository> {
        BookingService::new(
            InMemoryBookingRepository::new(),
            CalendarService::new(),
            &AgendaConfig::default(),
        )
    }

    fn command(name: &str, reason: &str, date: NaiveDate) -> CreateBookingCommand {
        CreateBookingCommand {
            name: name.to_string(),
            reason: reason.to_string(),
            date,
            start_time: "21:00".to_string(),
        }
    }

    #[test]
    fn test_create_booking_fills_fixed_fields() {
        let mut service = create_test_service();
        let monday = date(2026, 10, 12);

        let result = service.create_booking(command("Ana", "", monday)).unwrap();
        let booking = result.booking;

        assert_eq!(booking.name, "Ana");
        assert_eq!(booking.reason, "Ministración");
        assert_eq!(booking.date, monday);
        assert_eq!(booking.start_time, "21:00");
        assert_eq!(booking.end_time, "22:00");
        assert_eq!(booking.ministracion_type, MinistracionType::Personal);
        assert!(booking.email.is_empty());
        assert!(Uuid::parse_str(&booking.id).is_ok());
        assert_eq!(service.booking_count().unwrap(), 1);
    }

    #[test]
    fn test_create_booking_keeps_given_reason() {
        let mut service = create_test_service();

        let result = service.create_booking(command("Luis", "Salud", date(2026, 10, 13))).unwrap();
        assert_eq!(result.booking.reason, "Salud");
    }

    #[test]
    fn test_create_booking_rejects_blank_names() {
        let mut service = create_test_service();

        for name in ["", "   ", "\t\n"] {
            let err = service.create_booking(command(name, "", date(2026, 10, 12))).unwrap_err();
            assert!(matches!(err, BookingError::Validation(BookingValidationError::EmptyName)));
        }
        assert_eq!(service.booking_count().unwrap(), 0);
    }

    #[test]
    fn test_create_booking_rejects_unavailable_days() {
        let mut service = create_test_service();
        let wednesday = date(2026, 10, 14);

        let err = service.create_booking(command("Ana", "", wednesday)).unwrap_err();
        assert!(matches!(
            err,
            BookingError::Validation(BookingValidationError::UnavailableDay(d)) if d == wednesday
        ));
        assert_eq!(service.booking_count().unwrap(), 0);
    }

    #[test]
    fn test_booking_ids_are_unique() {
        let mut service = create_test_service();

        let first = service.create_booking(command("Ana", "", date(2026, 10, 12))).unwrap();
        let second = service.create_booking(command("Luis", "", date(2026, 10, 13))).unwrap();
        assert_ne!(first.booking.id, second.booking.id);
    }

    #[test]
    fn test_slot_status_transitions_from_open_to_reserved() {
        let mut service = create_test_service();
        let monday = date(2026, 10, 12);

        assert_eq!(service.slot_status(monday, "21:00").unwrap(), SlotStatus::Open);
        assert!(service.find_booking(monday, "21:00").unwrap().is_none());

        let created = service.create_booking(command("Ana", "", monday)).unwrap().booking;

        assert_eq!(service.slot_status(monday, "21:00").unwrap(), SlotStatus::Reserved(created.clone()));
        assert_eq!(service.find_booking(monday, "21:00").unwrap(), Some(created));
    }

    #[test]
    fn test_slot_status_locks_non_available_days() {
        let service = create_test_service();

        assert_eq!(service.slot_status(date(2026, 10, 15), "21:00").unwrap(), SlotStatus::Locked);
        assert_eq!(service.slot_status(date(2026, 10, 18), "21:00").unwrap(), SlotStatus::Locked);
    }

    #[test]
    fn test_seed_example_booking_lands_on_current_monday() {
        let mut service = create_test_service();

        let seeded = service.seed_example_booking(date(2026, 10, 16), "21:00").unwrap();

        assert_eq!(seeded.name, "Ejemplo de Reserva");
        assert_eq!(seeded.date, date(2026, 10, 12));
        assert_eq!(seeded.reason, "Ministración");
        assert_eq!(service.find_booking(date(2026, 10, 12), "21:00").unwrap(), Some(seeded));
        assert_eq!(service.booking_count().unwrap(), 1);
    }
}
