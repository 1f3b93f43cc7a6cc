//! Domain-level command and result types.
//! The UI builds these from its form state; they never leave the domain layer.

pub mod bookings {
    use chrono::NaiveDate;
    use shared::Booking;

    /// Input for creating a new booking.
    #[derive(Debug, Clone)]
    pub struct CreateBookingCommand {
        pub name: String,
        pub reason: String,
        pub date: NaiveDate,
        pub start_time: String,
    }

    /// Result of creating a booking.
    #[derive(Debug, Clone)]
    pub struct CreateBookingResult {
        pub booking: Booking,
        pub success_message: String,
    }
}
