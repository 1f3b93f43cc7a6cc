//! # Domain Module
//!
//! Business logic for the agenda: week derivation and day eligibility
//! (`calendar`), slot lookup and booking creation (`booking_service`).
//! Nothing in here depends on egui.

pub mod booking_service;
pub mod calendar;
pub mod commands;
pub mod models;

pub use booking_service::BookingService;
pub use calendar::CalendarService;
