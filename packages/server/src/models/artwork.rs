use chrono::{DateTime, Utc};
use common::ArtworkRecord;
use serde::Serialize;

/// Response DTO for a single artwork.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ArtworkResponse {
    /// Database row id. Absent for records synthesized from storage.
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Display title, at most 200 characters.
    #[schema(example = "Summer Vacation")]
    pub title: String,
    /// Public URL of the full-resolution image.
    pub image_url: String,
    /// Identifier the upload was tagged with.
    #[schema(example = "public")]
    pub user_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Where a gallery listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GallerySource {
    /// Rows read from the metadata table.
    Database,
    /// Records synthesized from a bucket listing; titles are derived
    /// from object names because no metadata exists on that path.
    Storage,
}

/// Response DTO for the gallery listing.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct GalleryResponse {
    pub artworks: Vec<ArtworkResponse>,
    pub total: u64,
    pub source: GallerySource,
}

impl From<ArtworkRecord> for ArtworkResponse {
    fn from(record: ArtworkRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            image_url: record.image_url,
            user_id: record.user_id,
            created_at: record.created_at,
        }
    }
}

impl GalleryResponse {
    pub fn from_records(records: Vec<ArtworkRecord>) -> Self {
        let artworks: Vec<ArtworkResponse> =
            records.into_iter().map(ArtworkResponse::from).collect();
        let total = artworks.len() as u64;
        Self {
            artworks,
            total,
            source: GallerySource::Database,
        }
    }
}
