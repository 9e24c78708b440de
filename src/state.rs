use crate::models::HabitState;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub habit: Arc<Mutex<HabitState>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, habit: HabitState) -> Self {
        Self {
            data_path,
            habit: Arc::new(Mutex::new(habit)),
        }
    }
}
