use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Errors surfaced by the record handlers.
///
/// `NotFound` maps to 404; everything else the store or the payload can go
/// wrong with is a `Persistence` failure and maps to 500 with the raw detail
/// echoed back to the caller.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Persistence { message: String, detail: String },
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppError {
    pub fn not_found(label: &str) -> Self {
        AppError::NotFound(format!("{} not found", label))
    }

    /// Generic persistence failure carrying the underlying error text.
    pub fn persistence(detail: impl fmt::Display) -> Self {
        AppError::Persistence {
            message: "Server error".to_string(),
            detail: detail.to_string(),
        }
    }

    /// Replaces the caller-facing message of a persistence failure.
    pub fn context(self, message: impl Into<String>) -> Self {
        match self {
            AppError::Persistence { detail, .. } => AppError::Persistence {
                message: message.into(),
                detail,
            },
            other => other,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Persistence { message, detail } => write!(f, "{}: {}", message, detail),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::persistence(err)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(message) => {
                log::warn!("⚠️  {}", message);
                ErrorResponse {
                    message: message.clone(),
                    error: None,
                }
            }
            AppError::Persistence { message, detail } => {
                log::error!("❌ {}: {}", message, detail);
                ErrorResponse {
                    message: message.clone(),
                    error: Some(detail.clone()),
                }
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
