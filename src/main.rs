use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use theater_booking::{
    AppState,
    config::{Config, LogFormat},
    controllers::Shell,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Логи в stderr, чтобы не мешать меню в stdout
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log));
    match config.app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    info!(
        "Starting theater booking ({}), hall {}x{}",
        config.app.environment, config.hall.rows, config.hall.seats_per_row
    );

    // Загружаем брони или заполняем зал случайно
    let mut state = AppState::new(config)
        .await
        .context("Failed to load booking data")?;

    let mut shell = Shell::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    shell.run(&mut state).await?;

    Ok(())
}
