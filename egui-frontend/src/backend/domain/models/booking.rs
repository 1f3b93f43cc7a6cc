/// Reasons a booking submission is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Day {0} does not offer the ministración slot")]
    UnavailableDay(chrono::NaiveDate),
    #[error("No slot is selected")]
    NoSlotSelected,
}

/// Reasons activating a slot does not open the booking dialog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotRejection {
    #[error("Day does not offer the ministración slot")]
    UnavailableDay,
    #[error("Slot is already reserved")]
    AlreadyReserved,
    #[error("Booking dialog is already open")]
    DialogOpen,
    #[error("Slot status could not be read")]
    StorageUnavailable,
}

/// Failure of a booking creation attempt
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] BookingValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
