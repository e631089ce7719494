use bridge_traits::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Provider error: {0}")]
    Provider(#[source] BridgeError),

    #[error("Partial write: chunk {failed_chunk} of {total_chunks} failed with {tracks_applied} tracks already applied")]
    PartialWrite {
        failed_chunk: usize,
        total_chunks: usize,
        tracks_applied: usize,
        #[source]
        source: BridgeError,
    },
}

impl From<BridgeError> for SyncError {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::Unauthorized(message) => SyncError::Authentication(message),
            other => SyncError::Provider(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
