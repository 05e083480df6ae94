//! persistence.rs
//!
//! Сохранение и загрузка броней в JSON-файл.
//!
//! На диск пишется только список броней. Таблица занятости всегда
//! восстанавливается из него при загрузке. Если файла ещё нет, зал
//! заполняется случайными занятыми местами, а список броней пуст.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::HallConfig;
use crate::error::{BookingError, Result};
use crate::models::{Booking, BookingStore, Seat, SeatGrid};
use crate::services::reservation::ReservationEngine;

/// Формат файла с бронями.
#[derive(Debug, Serialize, Deserialize)]
struct BookingDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
    bookings: Vec<Booking>,
}

#[derive(Debug, Clone)]
pub struct Persistence {
    path: PathBuf,
}

impl Persistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Загружает состояние зала. Без файла - случайное заполнение.
    pub async fn load<R: Rng + ?Sized>(
        &self,
        hall: &HallConfig,
        rng: &mut R,
    ) -> Result<ReservationEngine> {
        let engine = match self.load_bookings().await? {
            Some(bookings) => {
                let grid = rebuild_grid(hall.rows, hall.seats_per_row, &bookings)?;
                info!(
                    "Loaded {} bookings from {}, {} seats occupied",
                    bookings.len(),
                    self.path.display(),
                    grid.occupied_count()
                );
                ReservationEngine::from_parts(grid, BookingStore::from(bookings))
            }
            None => {
                let mut grid = SeatGrid::new(hall.rows, hall.seats_per_row);
                let picks = seed_random(&mut grid, hall.occupied_fraction, rng)?;
                info!(
                    "No booking data at {}, seeded {} random picks ({} seats occupied)",
                    self.path.display(),
                    picks,
                    grid.occupied_count()
                );
                ReservationEngine::from_parts(grid, BookingStore::new())
            }
        };
        Ok(engine)
    }

    /// `None`, если файла нет.
    pub async fn load_bookings(&self) -> Result<Option<Vec<Booking>>> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                error!("Failed to read {}: {}", self.path.display(), e);
                return Err(BookingError::PersistLoad(format!("{}: {}", self.path.display(), e)));
            }
        };

        let document: BookingDocument = serde_json::from_str(&data).map_err(|e| {
            error!("Malformed booking data in {}: {}", self.path.display(), e);
            BookingError::PersistLoad(format!("{}: {}", self.path.display(), e))
        })?;

        if let Some(booking) = document.bookings.iter().find(|b| b.seats.is_empty()) {
            return Err(BookingError::PersistLoad(format!(
                "booking '{}' has no seats",
                booking.name
            )));
        }

        Ok(Some(document.bookings))
    }

    /// Перезаписывает файл целиком.
    pub async fn save(&self, store: &BookingStore) -> Result<()> {
        let document = BookingDocument {
            saved_at: Some(Utc::now()),
            bookings: store.all().to_vec(),
        };
        let data = serde_json::to_string_pretty(&document)
            .map_err(|e| BookingError::PersistSave(e.to_string()))?;

        tokio::fs::write(&self.path, data).await.map_err(|e| {
            error!("Failed to write {}: {}", self.path.display(), e);
            BookingError::PersistSave(format!("{}: {}", self.path.display(), e))
        })?;

        info!("Saved {} bookings to {}", store.len(), self.path.display());
        Ok(())
    }
}

/// Таблица занятости по броням: занято всё, что упомянуто хоть в одной брони.
pub fn rebuild_grid(rows: u32, seats_per_row: u32, bookings: &[Booking]) -> Result<SeatGrid> {
    let mut grid = SeatGrid::new(rows, seats_per_row);
    for booking in bookings {
        for seat in &booking.seats {
            grid.set_occupied(seat, true).map_err(|_| {
                BookingError::PersistLoad(format!(
                    "booking '{}' references seat outside the hall ({})",
                    booking.name, seat
                ))
            })?;
        }
    }
    Ok(grid)
}

/// Случайно занимает `floor(capacity * fraction)` мест, с повторами.
/// Возвращает число выборок.
pub fn seed_random<R: Rng + ?Sized>(
    grid: &mut SeatGrid,
    fraction: f64,
    rng: &mut R,
) -> Result<usize> {
    let picks = (grid.capacity() as f64 * fraction).floor() as usize;
    for _ in 0..picks {
        let row = rng.gen_range(1..=grid.rows());
        let number = rng.gen_range(1..=grid.seats_per_row());
        grid.set_occupied(&Seat::new(row, number), true)?;
    }
    Ok(picks)
}
