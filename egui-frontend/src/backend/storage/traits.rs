//! # Storage Traits
//!
//! Storage abstraction used by the domain layer, so the booking service
//! does not care where bookings are kept.

use anyhow::Result;
use chrono::NaiveDate;
use shared::Booking;

/// Trait defining the interface for booking storage operations
///
/// Storage is append-only: bookings are never updated or deleted. It does not
/// enforce one booking per slot; that is gated before a booking is created.
pub trait BookingStorage {
    /// Append a new booking
    fn store_booking(&mut self, booking: &Booking) -> Result<()>;

    /// First booking matching the exact (date, start time) pair
    fn find_booking(&self, date: NaiveDate, start_time: &str) -> Result<Option<Booking>>;

    /// Number of stored bookings
    fn count_bookings(&self) -> Result<usize>;
}
