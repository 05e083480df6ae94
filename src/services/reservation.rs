//! reservation.rs
//!
//! Движок бронирования. Владеет таблицей занятости и списком броней и
//! держит их согласованными: место занято тогда и только тогда, когда оно
//! есть в какой-нибудь брони.
//!
//! Все операции сначала проверяют запрос и только потом меняют состояние,
//! поэтому неудачный вызов ничего не изменяет.

use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::error::{BookingError, Result};
use crate::models::{Booking, BookingStore, Seat, SeatGrid};

#[derive(Debug, Clone)]
pub struct ReservationEngine {
    grid: SeatGrid,
    store: BookingStore,
}

impl ReservationEngine {
    /// Пустой зал без броней.
    pub fn new(rows: u32, seats_per_row: u32) -> Self {
        Self::from_parts(SeatGrid::new(rows, seats_per_row), BookingStore::new())
    }

    pub fn from_parts(grid: SeatGrid, store: BookingStore) -> Self {
        Self { grid, store }
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn free_seats(&self) -> Vec<Seat> {
        self.grid.list_free()
    }

    pub fn seat_map(&self) -> String {
        self.grid.render()
    }

    /// Проверяет, что `count` свободных мест вообще есть, и отдаёт их список.
    pub fn check_availability(&self, count: usize) -> Result<Vec<Seat>> {
        let free = self.free_seats();
        if count > free.len() {
            warn!("Requested {} seats, only {} free", count, free.len());
            return Err(BookingError::InsufficientSeats { available: free.len() });
        }
        Ok(free)
    }

    /// Создаёт бронь. `selection` - номера (с единицы) в текущем списке свободных мест.
    pub fn create_booking(&mut self, name: &str, selection: &[usize]) -> Result<Booking> {
        let name = validate_name(name)?;
        let seats = resolve_selection(&self.free_seats(), selection)?;

        for seat in &seats {
            self.grid.set_occupied(seat, true)?;
        }
        let booking = Booking::new(name, seats);
        self.store.append(booking.clone());

        info!("Created booking '{}' with {} seats", booking.name, booking.seats.len());
        Ok(booking)
    }

    /// Заменяет места брони новым выбором.
    ///
    /// Список свободных мест строится до освобождения старых мест брони,
    /// так что свои места в нём не предлагаются. Старые места освобождаются,
    /// новые занимаются в том же шаге, что и замена списка.
    pub fn modify_booking(&mut self, name: &str, selection: &[usize]) -> Result<Booking> {
        let idx = self.position(name)?;
        let new_seats = resolve_selection(&self.free_seats(), selection)?;

        let booking = self
            .store
            .get_mut(idx)
            .ok_or_else(|| BookingError::BookingNotFound(name.to_string()))?;
        let old_seats = std::mem::replace(&mut booking.seats, new_seats.clone());
        let modified = booking.clone();

        self.release(&old_seats)?;
        for seat in &new_seats {
            self.grid.set_occupied(seat, true)?;
        }

        info!(
            "Modified booking '{}': {} seats -> {} seats",
            modified.name,
            old_seats.len(),
            modified.seats.len()
        );
        Ok(modified)
    }

    pub fn cancel_booking(&mut self, name: &str) -> Result<Booking> {
        let idx = self.position(name)?;
        let target = self.store.all()[idx].clone();
        let removed = self
            .store
            .remove(&target)
            .ok_or_else(|| BookingError::BookingNotFound(name.to_string()))?;

        self.release(&removed.seats)?;

        info!("Cancelled booking '{}', {} seats released", removed.name, removed.seats.len());
        Ok(removed)
    }

    pub fn list_bookings(&self) -> Result<&[Booking]> {
        if self.store.is_empty() {
            return Err(BookingError::NoBookings);
        }
        debug!("Listing {} bookings", self.store.len());
        Ok(self.store.all())
    }

    fn position(&self, name: &str) -> Result<usize> {
        let name = name.trim();
        self.store.position_by_name(name).ok_or_else(|| {
            warn!("Booking '{}' not found", name);
            BookingError::BookingNotFound(name.to_string())
        })
    }

    // Место, которое всё ещё есть в другой брони, остаётся занятым
    fn release(&mut self, seats: &[Seat]) -> Result<()> {
        for seat in seats {
            if !self.store.holds(seat) {
                self.grid.set_occupied(seat, false)?;
            }
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BookingError::InvalidName);
    }
    Ok(name)
}

/// Переводит номера из списка свободных мест в сами места.
///
/// Все номера разрешаются по одному и тому же снимку `free`.
pub fn resolve_selection(free: &[Seat], selection: &[usize]) -> Result<Vec<Seat>> {
    if selection.len() > free.len() {
        return Err(BookingError::InsufficientSeats { available: free.len() });
    }
    if selection.is_empty() {
        return Err(BookingError::InvalidSelection("no seats selected".to_string()));
    }

    let mut seen = HashSet::with_capacity(selection.len());
    let mut seats = Vec::with_capacity(selection.len());
    for &index in selection {
        if index == 0 || index > free.len() {
            return Err(BookingError::InvalidSelection(format!(
                "{} is not between 1 and {}",
                index,
                free.len()
            )));
        }
        if !seen.insert(index) {
            return Err(BookingError::InvalidSelection(format!("{} selected twice", index)));
        }
        seats.push(free[index - 1]);
    }
    Ok(seats)
}
