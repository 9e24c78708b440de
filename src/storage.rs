use crate::errors::AppError;
use crate::models::HabitState;
use std::{io::ErrorKind, path::Path};
use tokio::fs;
use tracing::{error, warn};

/// Loads the saved commitment. Anything missing, unreadable or malformed is
/// treated as no saved state.
pub async fn load_data(path: &Path) -> HabitState {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<HabitState>(&bytes) {
            Ok(data) if data.is_consistent() => data,
            Ok(data) => {
                warn!(
                    current_day = data.current_day,
                    total_days = data.total_days,
                    "discarding inconsistent habit state"
                );
                HabitState::default()
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                HabitState::default()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => HabitState::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            HabitState::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &HabitState) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Removes the saved commitment. A file that is already gone is fine.
pub async fn clear_data(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::internal(err)),
    }
}
