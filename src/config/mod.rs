use ::config::{builder::DefaultState, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::env;
use thiserror::Error;
use validator::Validate;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub app: AppConfig,
    #[validate(nested)]
    pub hall: HallConfig,
    #[validate(nested)]
    pub storage: StorageConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

// Размеры зала и начальное случайное заполнение
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HallConfig {
    #[validate(range(min = 1, max = 1000))]
    pub rows: u32,
    #[validate(range(min = 1, max = 1000))]
    pub seats_per_row: u32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub occupied_fraction: f64,
}

// Где лежит файл с бронями
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StorageConfig {
    #[validate(length(min = 1))]
    pub data_file: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl Default for HallConfig {
    fn default() -> Self {
        Self { rows: 16, seats_per_row: 15, occupied_fraction: 0.1 }
    }
}

impl Config {
    /// Значения по умолчанию, без внешних источников.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let hall = HallConfig::default();
        let builder = ::config::Config::builder()
            .set_default("app.environment", "development")?
            .set_default("app.rust_log", "theater_booking=info")?
            .set_default("app.log_format", "pretty")?
            .set_default("hall.rows", i64::from(hall.rows))?
            .set_default("hall.seats_per_row", i64::from(hall.seats_per_row))?
            .set_default("hall.occupied_fraction", hall.occupied_fraction)?
            .set_default("storage.data_file", "booking_data.json")?;
        Ok(builder)
    }

    /// Порядок источников: значения по умолчанию, `theater.toml`, переменные `THEATER_*`.
    /// `RUST_LOG` перекрывает `app.rust_log`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Self::builder()?
            .add_source(File::with_name("theater").required(false))
            .add_source(
                Environment::with_prefix("THEATER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("app.rust_log", env::var("RUST_LOG").ok())?;

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
