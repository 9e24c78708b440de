use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/start", post(handlers::start_form))
        .route("/check-in", post(handlers::check_in_form))
        .route("/reset", post(handlers::reset_form))
        .route("/api/state", get(handlers::get_state))
        .route("/api/start", post(handlers::start))
        .route("/api/check-in", post(handlers::check_in))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
