use std::fmt;

/// Errors that can occur talking to the storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// The request never completed (connect failure, timeout, decode).
    Transport(reqwest::Error),
    /// The backend answered with a non-success status.
    Upstream { status: u16, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "storage transport error: {err}"),
            Self::Upstream { status, message } => {
                write!(f, "storage request failed ({status}): {message}")
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Upstream { .. } => None,
        }
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}
