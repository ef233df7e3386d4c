use thiserror::Error;

/// Unified error type for release-note operations
#[derive(Error, Debug)]
pub enum ReleaseNoteError {
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-note
pub type Result<T> = std::result::Result<T, ReleaseNoteError>;

impl ReleaseNoteError {
    /// Create a fetch error with context
    pub fn fetch(msg: impl Into<String>) -> Self {
        ReleaseNoteError::Fetch(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNoteError::Config(msg.into())
    }
}
