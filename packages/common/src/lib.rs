pub mod catalog;
pub mod storage;

pub use catalog::{ArtworkCatalog, ArtworkRecord, CatalogError, NewArtwork};
pub use storage::{ObjectStore, StorageError, StoredObject};
