use crate::error::{BookingError, Result};
use super::Seat;

/// Таблица занятости мест: `rows` x `seats_per_row`, хранится построчно.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    rows: u32,
    seats_per_row: u32,
    occupied: Vec<bool>,
}

impl SeatGrid {
    pub fn new(rows: u32, seats_per_row: u32) -> Self {
        Self {
            rows,
            seats_per_row,
            occupied: vec![false; (rows * seats_per_row) as usize],
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    pub fn capacity(&self) -> usize {
        self.occupied.len()
    }

    pub fn contains(&self, seat: &Seat) -> bool {
        (1..=self.rows).contains(&seat.row) && (1..=self.seats_per_row).contains(&seat.number)
    }

    fn index(&self, seat: &Seat) -> Result<usize> {
        if !self.contains(seat) {
            return Err(BookingError::InvalidSeat { row: seat.row, number: seat.number });
        }
        Ok(((seat.row - 1) * self.seats_per_row + (seat.number - 1)) as usize)
    }

    pub fn is_occupied(&self, seat: &Seat) -> Result<bool> {
        let idx = self.index(seat)?;
        Ok(self.occupied[idx])
    }

    pub fn set_occupied(&mut self, seat: &Seat, occupied: bool) -> Result<()> {
        let idx = self.index(seat)?;
        self.occupied[idx] = occupied;
        Ok(())
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|o| **o).count()
    }

    /// Свободные места в порядке ряд за рядом, внутри ряда по номеру.
    pub fn list_free(&self) -> Vec<Seat> {
        self.seats()
            .filter(|(_, occupied)| !occupied)
            .map(|(seat, _)| seat)
            .collect()
    }

    /// Схема зала: строка на ряд, `X` занято, `-` свободно.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.capacity() + self.rows as usize);
        for (seat, occupied) in self.seats() {
            out.push(if occupied { 'X' } else { '-' });
            if seat.number == self.seats_per_row {
                out.push('\n');
            }
        }
        out
    }

    fn seats(&self) -> impl Iterator<Item = (Seat, bool)> + '_ {
        let per_row = self.seats_per_row;
        self.occupied.iter().enumerate().map(move |(i, occupied)| {
            let i = i as u32;
            (Seat::new(i / per_row + 1, i % per_row + 1), *occupied)
        })
    }
}
