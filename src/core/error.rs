// src/core/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API returned status {status}{}", .detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },

    #[error("Request to API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected API response: {0}")]
    Decode(String),

    #[error("No token received")]
    MissingToken,
}

impl ApiError {
    /// Message for inline display: the API `detail` when it sent one,
    /// otherwise the caller's fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::MissingToken => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
