//! # Storage Module
//!
//! Booking storage for the agenda. Bookings are held in memory for the
//! lifetime of the session and lost when the app exits.

pub mod memory;
pub mod traits;

pub use memory::InMemoryBookingRepository;
pub use traits::BookingStorage;
