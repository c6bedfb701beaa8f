// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("No OTP request found for this phone number")]
    OTPNotFound,

    #[error("OTP has expired")]
    OTPExpired,

    #[error("Invalid OTP")]
    InvalidOTP,

    #[error("SMS delivery failed: {0}")]
    Delivery(String),

    #[error("Token signing failed: {0}")]
    TokenSigning(String),

    #[error("Authorization header is required")]
    MissingAuthHeader,

    #[error("Authorization header format must be Bearer {{token}}")]
    MalformedAuthHeader,

    // Same message for parse, signature, algorithm and expiry failures.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("User with this phone number already exists")]
    UserAlreadyExists,

    #[error("Game not found")]
    GameNotFound,

    #[error("Game is already full")]
    GameFull,

    #[error("Game has already started")]
    GameStarted,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::BadRequest(_)
            | AppError::OTPNotFound
            | AppError::OTPExpired
            | AppError::InvalidOTP
            | AppError::GameFull
            | AppError::GameStarted => StatusCode::BAD_REQUEST,
            AppError::MissingAuthHeader
            | AppError::MalformedAuthHeader
            | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound | AppError::GameNotFound => StatusCode::NOT_FOUND,
            AppError::UserAlreadyExists => StatusCode::CONFLICT,
            AppError::Delivery(_) | AppError::TokenSigning(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the client. Server-side failures keep their detail in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Delivery(_) => "Failed to send OTP".to_string(),
            AppError::TokenSigning(_) => "Failed to generate token".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Server error occurred");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Client error occurred");
        }

        let body = Json(json!({
            "error": self.public_message(),
            "success": false,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

// Helper conversion functions
impl AppError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn delivery(msg: impl Into<String>) -> Self {
        AppError::Delivery(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
