use thiserror::Error;

/// Ошибки ядра бронирования.
///
/// Всё, кроме `PersistLoad`, восстановимо: оболочка сообщает оператору и
/// возвращается в меню.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("not enough free seats, only {available} available")]
    InsufficientSeats { available: usize },

    #[error("no booking found with name '{0}'")]
    BookingNotFound(String),

    // Информационный сигнал, не настоящая ошибка
    #[error("no saved bookings")]
    NoBookings,

    #[error("seat (row {row}, number {number}) is outside the hall")]
    InvalidSeat { row: u32, number: u32 },

    #[error("booking name must not be blank")]
    InvalidName,

    #[error("failed to load booking data: {0}")]
    PersistLoad(String),

    #[error("failed to save booking data: {0}")]
    PersistSave(String),
}

pub type Result<T> = std::result::Result<T, BookingError>;
