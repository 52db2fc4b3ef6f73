use std::sync::Arc;

use common::catalog::postgrest::PostgrestCatalog;
use common::storage::supabase::SupabaseStorage;
use common::{ArtworkCatalog, ObjectStore};

use crate::config::AppConfig;

/// Service-role clients. Present only when a service-role key is
/// configured; uploads are refused without them.
#[derive(Clone)]
pub struct Publisher {
    pub store: Arc<dyn ObjectStore>,
    pub catalog: Arc<dyn ArtworkCatalog>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Anonymous-key table client, used for listing.
    pub catalog: Arc<dyn ArtworkCatalog>,
    /// Anonymous-key bucket client, used for the listing fallback.
    pub store: Arc<dyn ObjectStore>,
    pub publisher: Option<Publisher>,
}

impl AppState {
    /// Wire the Supabase clients described by `config`.
    pub fn from_config(config: AppConfig) -> Result<Self, reqwest::Error> {
        let supabase = &config.supabase;
        let upload = &config.upload;

        let store = SupabaseStorage::new(&supabase.url, &upload.bucket, &supabase.anon_key)?;
        let catalog = PostgrestCatalog::new(&supabase.url, &upload.table, &supabase.anon_key)?;

        let publisher = match supabase.service_role_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => Some(Publisher {
                store: Arc::new(SupabaseStorage::new(&supabase.url, &upload.bucket, key)?),
                catalog: Arc::new(PostgrestCatalog::new(&supabase.url, &upload.table, key)?),
            }),
            None => None,
        };

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            store: Arc::new(store),
            publisher,
        })
    }
}
