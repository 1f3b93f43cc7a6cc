//! # Backend Module for egui Frontend
//!
//! Direct, synchronous access to the agenda's domain services. There is no
//! IO layer: bookings live in memory for the lifetime of the session.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;

pub mod domain;
pub mod storage;

pub use storage::InMemoryBookingRepository;

use crate::config::AgendaConfig;

/// Main backend struct that orchestrates all services
#[derive(Debug, Clone)]
pub struct Backend {
    pub calendar_service: domain::CalendarService,
    pub booking_service: domain::BookingService<InMemoryBookingRepository>,
}

impl Backend {
    /// Create a new backend instance, seeding the example booking when configured
    pub fn new(config: &AgendaConfig, today: NaiveDate) -> Result<Self> {
        let calendar_service = domain::CalendarService::new();
        let mut booking_service = domain::BookingService::new(
            InMemoryBookingRepository::new(),
            calendar_service.clone(),
            config,
        );

        if config.seed_example_booking {
            let seeded = booking_service.seed_example_booking(today, &config.slot_start)?;
            info!("📝 Seeded example booking on {}", seeded.date);
        }
        info!("📝 Session starts with {} booking(s)", booking_service.booking_count()?);

        Ok(Backend {
            calendar_service,
            booking_service,
        })
    }
}
