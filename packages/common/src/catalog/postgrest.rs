use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::error::CatalogError;
use super::record::{ArtworkRecord, NewArtwork};
use super::traits::ArtworkCatalog;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// PostgREST client for one table of a Supabase project.
///
/// Constructed with the anon key it is subject to the table's
/// row-level-security policies; with the service-role key it bypasses
/// them, which is what lets uploads tag rows with arbitrary user ids.
pub struct PostgrestCatalog {
    client: Client,
    base_url: String,
    table: String,
    api_key: String,
}

impl PostgrestCatalog {
    /// Build a client for one table of a Supabase project.
    pub fn new(base_url: &str, table: &str, api_key: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            table: table.to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    fn table_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl ArtworkCatalog for PostgrestCatalog {
    async fn list(&self) -> Result<Vec<ArtworkRecord>, CatalogError> {
        let response = self
            .client
            .get(self.table_endpoint())
            .query(&[("select", "*"), ("order", "id.asc")])
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn insert(&self, artwork: NewArtwork) -> Result<ArtworkRecord, CatalogError> {
        tracing::debug!(user_id = %artwork.user_id, "inserting artwork row");
        let response = self
            .client
            .post(self.table_endpoint())
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .header("Prefer", "return=representation")
            .json(&artwork)
            .send()
            .await?;
        let response = check_status(response).await?;
        let mut rows: Vec<ArtworkRecord> = response.json().await?;
        if rows.is_empty() {
            return Err(CatalogError::MissingRow);
        }
        Ok(rows.remove(0))
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(CatalogError::Upstream {
        status: status.as_u16(),
        message,
    })
}
