use anyhow::Result;
use chrono::NaiveDate;
use log::debug;
use shared::Booking;

use crate::backend::storage::traits::BookingStorage;

/// Session-local booking repository backed by a Vec
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingRepository {
    bookings: Vec<Booking>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStorage for InMemoryBookingRepository {
    fn store_booking(&mut self, booking: &Booking) -> Result<()> {
        debug!("📝 STORAGE: Appending booking {} for {} {}", booking.id, booking.date, booking.start_time);
        self.bookings.push(booking.clone());
        Ok(())
    }

    fn find_booking(&self, date: NaiveDate, start_time: &str) -> Result<Option<Booking>> {
        // Linear scan; a session only ever holds a handful of bookings
        Ok(self
            .bookings
            .iter()
            .find(|booking| booking.occupies(date, start_time))
            .cloned())
    }

    fn count_bookings(&self) -> Result<usize> {
        Ok(self.bookings.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MinistracionType;

    fn booking(id: &str, date: NaiveDate, start_time: &str) -> Booking {
        Booking {
            id: id.to_string(),
            name: format!("Persona {}", id),
            email: String::new(),
            reason: "Ministración".to_string(),
            date,
            start_time: start_time.to_string(),
            end_time: "22:00".to_string(),
            ministracion_type: MinistracionType::Personal,
        }
    }

    #[test]
    fn test_store_booking_appends() {
        let mut repo = InMemoryBookingRepository::new();
        let monday = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2026, 10, 13).unwrap();
        assert_eq!(repo.count_bookings().unwrap(), 0);

        repo.store_booking(&booking("b", tuesday, "21:00")).unwrap();
        repo.store_booking(&booking("a", monday, "21:00")).unwrap();

        assert_eq!(repo.count_bookings().unwrap(), 2);
        assert_eq!(repo.find_booking(tuesday, "21:00").unwrap().map(|b| b.id), Some("b".to_string()));
    }

    #[test]
    fn test_find_booking_requires_exact_date_and_time() {
        let mut repo = InMemoryBookingRepository::new();
        let monday = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
        let next_monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert!(repo.find_booking(monday, "21:00").unwrap().is_none());

        repo.store_booking(&booking("a", monday, "21:00")).unwrap();

        assert_eq!(repo.find_booking(monday, "21:00").unwrap().map(|b| b.id), Some("a".to_string()));
        assert!(repo.find_booking(monday, "20:00").unwrap().is_none());
        assert!(repo.find_booking(next_monday, "21:00").unwrap().is_none());
    }

    #[test]
    fn test_storage_accepts_duplicate_slots() {
        let mut repo = InMemoryBookingRepository::new();
        let monday = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();

        repo.store_booking(&booking("first", monday, "21:00")).unwrap();
        repo.store_booking(&booking("second", monday, "21:00")).unwrap();

        assert_eq!(repo.count_bookings().unwrap(), 2);
        assert_eq!(repo.find_booking(monday, "21:00").unwrap().map(|b| b.id), Some("first".to_string()));
    }
}
