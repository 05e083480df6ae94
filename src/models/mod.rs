pub mod seat;
pub mod booking;
pub mod grid;
pub mod store;

pub use seat::Seat;
pub use booking::Booking;
pub use grid::SeatGrid;
pub use store::BookingStore;
