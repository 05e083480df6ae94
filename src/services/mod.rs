pub mod reservation;
pub mod persistence;

pub use reservation::ReservationEngine;
pub use persistence::Persistence;
