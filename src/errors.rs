use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<StartError> for AppError {
    fn from(err: StartError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Rejected onboarding input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("habit name must not be empty")]
    EmptyName,
    #[error("stake amount must be a positive integer, got {0}")]
    InvalidStake(i64),
    #[error("total days must be a positive integer, got {0}")]
    InvalidDays(i64),
}
