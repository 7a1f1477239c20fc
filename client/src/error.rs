/// Error types for the BragBoard client
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// True for failures that roll back an optimistic mutation: transport
    /// errors and authoritative rejections. Local validation never reaches
    /// the network and leaves no prediction to undo.
    pub fn is_remote(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Api { .. })
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
