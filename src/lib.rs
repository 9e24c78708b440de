pub mod app;
pub mod config;
pub mod errors;
pub mod habit;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use storage::load_data;
