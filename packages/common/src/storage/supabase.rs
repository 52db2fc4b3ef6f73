use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::error::StorageError;
use super::traits::{ObjectStore, StoredObject};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const LIST_PAGE_LIMIT: u32 = 1000;

/// Supabase Storage REST client scoped to a single bucket.
///
/// The same type serves both roles: constructed with the anon key it
/// can list a public bucket, constructed with the service-role key it
/// can write to it.
pub struct SupabaseStorage {
    client: Client,
    base_url: String,
    bucket: String,
    api_key: String,
}

impl SupabaseStorage {
    /// Build a client for one bucket of a Supabase project.
    pub fn new(base_url: &str, bucket: &str, api_key: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            bucket: bucket.to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    fn object_endpoint(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }

    fn list_endpoint(&self) -> String {
        format!("{}/storage/v1/object/list/{}", self.base_url, self.bucket)
    }
}

/// Entry shape returned by the list endpoint. Folder placeholders come
/// back with a null `id` and no metadata.
#[derive(Debug, Deserialize)]
struct ListEntry {
    name: String,
    id: Option<String>,
}

#[async_trait]
impl ObjectStore for SupabaseStorage {
    async fn put(&self, key: &str, content_type: &str, data: Vec<u8>) -> Result<(), StorageError> {
        tracing::debug!(%key, size = data.len(), "uploading object");
        let response = self
            .client
            .post(self.object_endpoint(key))
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<StoredObject>, StorageError> {
        let body = serde_json::json!({
            "prefix": prefix,
            "limit": LIST_PAGE_LIMIT,
            "offset": 0,
            "sortBy": { "column": "name", "order": "asc" },
        });
        let response = self
            .client
            .post(self.list_endpoint())
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;
        let entries: Vec<ListEntry> = response.json().await?;
        Ok(entries
            .into_iter()
            .map(|entry| StoredObject {
                name: entry.name,
                id: entry.id,
            })
            .collect())
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, key
        )
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(StorageError::Upstream {
        status: status.as_u16(),
        message,
    })
}
