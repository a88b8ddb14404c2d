use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FestidexError {
    #[error("Failed to fetch {resource}: {message}")]
    Fetch { resource: String, message: String },

    #[error("Failed to decode {resource}: {message}")]
    Decode { resource: String, message: String },

    #[error("Artist not found: {0}")]
    ArtistNotFound(String),

    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FestidexError>;

impl FestidexError {
    pub fn fetch(resource: &str, message: impl ToString) -> Self {
        FestidexError::Fetch {
            resource: resource.to_string(),
            message: message.to_string(),
        }
    }

    pub fn decode(resource: &str, message: impl ToString) -> Self {
        FestidexError::Decode {
            resource: resource.to_string(),
            message: message.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            FestidexError::Fetch { .. } => StatusCode::BAD_GATEWAY,
            FestidexError::Decode { .. } => StatusCode::BAD_GATEWAY,
            FestidexError::ArtistNotFound(_) => StatusCode::NOT_FOUND,
            FestidexError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            FestidexError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FestidexError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for FestidexError {
    fn from(e: serde_json::Error) -> Self {
        FestidexError::Render(e.to_string())
    }
}

// Axum IntoResponse implementation (feature-gated)
#[cfg(feature = "axum-support")]
use axum::response::{IntoResponse, Json, Response};
#[cfg(feature = "axum-support")]
use serde::Serialize;

#[cfg(feature = "axum-support")]
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub request_id: String,
}

#[cfg(feature = "axum-support")]
impl IntoResponse for FestidexError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error_code, message) = match &self {
            FestidexError::Fetch { resource, .. } => (
                "fetch_error",
                format!("Upstream {} unavailable", resource),
            ),
            FestidexError::Decode { resource, .. } => (
                "decode_error",
                format!("Upstream {} payload malformed", resource),
            ),
            FestidexError::ArtistNotFound(id) => {
                ("not_found", format!("Artist '{}' does not exist", id))
            }
            FestidexError::RouteNotFound(path) => {
                ("not_found", format!("Nothing to see at '{}'", path))
            }
            FestidexError::Render(e) => {
                tracing::error!("Render error: {}", e);
                ("internal_error", "Internal error".to_string())
            }
            FestidexError::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                ("internal_error", "Internal error".to_string())
            }
        };

        let error_response = ErrorResponse {
            error: error_code.to_string(),
            message,
            request_id: format!("req_fd_{}", uuid::Uuid::new_v4()),
        };

        (status, Json(error_response)).into_response()
    }
}
