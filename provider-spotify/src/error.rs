//! Error types for the Spotify provider

use thiserror::Error;

/// Spotify provider errors
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// Credential rejected by the service
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// API request returned an error status
    #[error("Spotify API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_seconds} seconds")]
    RateLimited { retry_after_seconds: u64 },

    /// Failed to parse API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Bridge error
    #[error(transparent)]
    Bridge(#[from] bridge_traits::error::BridgeError),
}

/// Result type for Spotify operations
pub type Result<T> = std::result::Result<T, SpotifyError>;

impl From<SpotifyError> for bridge_traits::error::BridgeError {
    fn from(error: SpotifyError) -> Self {
        match error {
            SpotifyError::AuthenticationFailed(msg) => {
                bridge_traits::error::BridgeError::Unauthorized(format!(
                    "Authentication failed: {}",
                    msg
                ))
            }
            SpotifyError::ApiError {
                status_code,
                message,
            } => bridge_traits::error::BridgeError::OperationFailed(format!(
                "API error (status {}): {}",
                status_code, message
            )),
            SpotifyError::RateLimited {
                retry_after_seconds,
            } => bridge_traits::error::BridgeError::OperationFailed(format!(
                "Rate limit exceeded, retry after {} seconds",
                retry_after_seconds
            )),
            SpotifyError::ParseError(msg) => {
                bridge_traits::error::BridgeError::OperationFailed(format!("Parse error: {}", msg))
            }
            SpotifyError::Bridge(e) => e,
        }
    }
}
