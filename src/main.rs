use habit_stake::{habit, load_data, models::CalendarDay, router, storage::persist_data, AppConfig, AppState};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut data = load_data(&config.data_path).await;
    if habit::check_missed_day(&mut data, CalendarDay::today()) {
        info!(habit = %data.habit_name, "missed a day since last run, stake forfeited");
        if let Err(err) = persist_data(&config.data_path, &data).await {
            warn!("failed to persist forfeiture: {}", err.message);
        }
    }

    let app = router(AppState::new(config.data_path, data));

    info!("listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
