use async_trait::async_trait;

use super::error::StorageError;

/// A single entry in a bucket listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Name relative to the listed prefix.
    pub name: String,
    /// Backend object id. Folder placeholders have none.
    pub id: Option<String>,
}

impl StoredObject {
    /// Whether this entry is a folder placeholder rather than an object.
    pub fn is_folder(&self) -> bool {
        self.id.is_none()
    }
}

/// Bucket-scoped object storage.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write an object. Keys are `/`-separated paths within the bucket.
    async fn put(&self, key: &str, content_type: &str, data: Vec<u8>) -> Result<(), StorageError>;

    /// List entries directly under `prefix` (`""` for the bucket root).
    async fn list(&self, prefix: &str) -> Result<Vec<StoredObject>, StorageError>;

    /// Public URL for an object key.
    fn public_url(&self, key: &str) -> String;
}
