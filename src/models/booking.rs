use serde::{Deserialize, Serialize};
use std::fmt;

use super::Seat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub name: String,
    pub seats: Vec<Seat>,
}

impl Booking {
    pub fn new(name: impl Into<String>, seats: Vec<Seat>) -> Self {
        Self { name: name.into(), seats }
    }

    // Сравнение имён без учёта регистра
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn holds(&self, seat: &Seat) -> bool {
        self.seats.contains(seat)
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seats = self
            .seats
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Booking name: {}, seats: {}", self.name, seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_match_ignores_case() {
        let booking = Booking::new("Anna", vec![Seat::new(1, 1)]);
        assert!(booking.matches_name("anna"));
        assert!(booking.matches_name("ANNA"));
        assert!(!booking.matches_name("Ann"));
    }

    #[test]
    fn display_lists_every_seat() {
        let booking = Booking::new("Bob", vec![Seat::new(1, 2), Seat::new(4, 5)]);
        assert_eq!(
            booking.to_string(),
            "Booking name: Bob, seats: Row: 1, Seat: 2, Row: 4, Seat: 5"
        );
    }
}
