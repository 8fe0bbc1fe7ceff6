use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Session rejected: {0}")]
    Unauthorized(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unexpected response: {0}")]
    ProviderError(String),

    #[error("GraphQL error: {0}")]
    GraphQlError(String),

    #[error("Malformed response: {0}")]
    DecodeError(String),

    #[error("No user in profile response")]
    MissingUser,
}

impl From<ApiError> for ApplicationError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::InvalidCredentials(msg) => ApplicationError::AuthFailed(msg),
            ApiError::Unauthorized(_) => ApplicationError::Unauthorized,
            ApiError::NetworkError(msg)
            | ApiError::ProviderError(msg)
            | ApiError::GraphQlError(msg) => ApplicationError::Upstream(msg),
            ApiError::DecodeError(msg) => ApplicationError::DataShape(msg),
            ApiError::MissingUser => ApplicationError::DataShape(ApiError::MissingUser.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::NetworkError("Request timeout".to_string())
        } else if error.is_connect() {
            ApiError::NetworkError(format!("Connection failed: {}", error))
        } else if error.is_decode() {
            ApiError::DecodeError(error.to_string())
        } else if let Some(status) = error.status() {
            match status.as_u16() {
                401 | 403 => ApiError::Unauthorized(error.to_string()),
                _ => ApiError::ProviderError(error.to_string()),
            }
        } else {
            ApiError::NetworkError(error.to_string())
        }
    }
}
