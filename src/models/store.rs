use super::{Booking, Seat};

/// Упорядоченный список броней. Поиск по имени возвращает первое совпадение.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.bookings.iter().position(|b| b.matches_name(name))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Booking> {
        self.position_by_name(name).map(|i| &self.bookings[i])
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Booking> {
        self.bookings.get_mut(index)
    }

    /// Удаляет первую структурно равную запись.
    pub fn remove(&mut self, booking: &Booking) -> Option<Booking> {
        let idx = self.bookings.iter().position(|b| b == booking)?;
        Some(self.bookings.remove(idx))
    }

    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn holds(&self, seat: &Seat) -> bool {
        self.bookings.iter().any(|b| b.holds(seat))
    }
}

impl From<Vec<Booking>> for BookingStore {
    fn from(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }
}
