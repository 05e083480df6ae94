pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod controllers;

use rand::{rngs::StdRng, Rng, SeedableRng};

use services::{Persistence, ReservationEngine};

// Состояние всего приложения: настройки, движок бронирования и файл данных
#[derive(Debug)]
pub struct AppState {
    pub config: config::Config,
    pub engine: ReservationEngine,
    pub persistence: Persistence,
}

impl AppState {
    pub async fn new(config: config::Config) -> error::Result<Self> {
        let mut rng = StdRng::from_entropy();
        Self::with_rng(config, &mut rng).await
    }

    /// Как `new`, но с заданным генератором для случайного заполнения зала.
    pub async fn with_rng<R: Rng + ?Sized>(config: config::Config, rng: &mut R) -> error::Result<Self> {
        let persistence = Persistence::new(&config.storage.data_file);
        let engine = persistence.load(&config.hall, rng).await?;

        Ok(Self { config, engine, persistence })
    }

    // Сохраняем брони перед выходом
    pub async fn shutdown(&self) -> error::Result<()> {
        self.persistence.save(self.engine.store()).await
    }
}
