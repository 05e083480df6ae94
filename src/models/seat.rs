use serde::{Deserialize, Serialize};
use std::fmt;

/// Место в зале. Нумерация рядов и мест с единицы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat {
    pub row: u32,
    pub number: u32,
}

impl Seat {
    pub fn new(row: u32, number: u32) -> Self {
        Self { row, number }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row: {}, Seat: {}", self.row, self.number)
    }
}
