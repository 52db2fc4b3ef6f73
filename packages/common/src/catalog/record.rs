use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the artwork metadata table.
///
/// Rows are append-only: nothing in this system mutates or deletes
/// them. `id` and `created_at` are assigned by the backend and absent
/// on records synthesized from a bucket listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub image_url: String,
    pub user_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for a new artwork row.
#[derive(Debug, Clone, Serialize)]
pub struct NewArtwork {
    pub title: String,
    pub image_url: String,
    pub user_id: String,
}
