use thiserror::Error;

/// Errors that can occur talking to the metadata table.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never completed (connect failure, timeout, decode).
    #[error("catalog transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("catalog request failed ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// An insert with `return=representation` came back empty.
    #[error("insert returned no row")]
    MissingRow,
}
