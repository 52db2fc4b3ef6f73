use async_trait::async_trait;

use super::error::CatalogError;
use super::record::{ArtworkRecord, NewArtwork};

/// The artwork metadata table.
#[async_trait]
pub trait ArtworkCatalog: Send + Sync {
    /// All rows, ordered by id ascending.
    async fn list(&self) -> Result<Vec<ArtworkRecord>, CatalogError>;

    /// Insert one row and return its stored representation.
    async fn insert(&self, artwork: NewArtwork) -> Result<ArtworkRecord, CatalogError>;
}
