use axum::Json;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{NewArtwork, StoredObject};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::models::artwork::{ArtworkResponse, GalleryResponse, GallerySource};
use crate::state::AppState;
use crate::utils::upload::{
    ALLOWED_EXTENSIONS, DEFAULT_USER_ID, image_extension, is_image_content_type, normalize_title,
    size_limit_message, user_segment,
};

const MISSING_FIELDS_MESSAGE: &str = "Provide a title and an image";
const UNSUPPORTED_TYPE_MESSAGE: &str = "Unsupported file type";

pub fn upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(8 * 1024 * 1024) // image cap plus multipart framing overhead
}

/// A fully validated image from the multipart form.
struct ImageUpload {
    content_type: String,
    extension: String,
    data: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Artworks",
    operation_id = "uploadArtwork",
    summary = "Upload an artwork",
    description = "Uploads an image with a title. The `file` and `title` multipart fields are \
        required; `user_id` is optional and defaults to `public`. The image is written to the \
        storage bucket and a metadata row tagged with the user id is inserted into the \
        artworks table.",
    request_body(content_type = "multipart/form-data", description = "Image with title and optional user id"),
    responses(
        (status = 201, description = "Artwork created", body = ArtworkResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 502, description = "Backend failure (UPSTREAM_ERROR)", body = ErrorBody),
        (status = 503, description = "Uploads disabled (UPLOADS_DISABLED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_artwork(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let Some(publisher) = state.publisher.clone() else {
        return Err(AppError::UploadsDisabled);
    };

    let max_bytes = state.config.upload.max_bytes;
    let mut image: Option<ImageUpload> = None;
    let mut title: Option<String> = None;
    let mut user_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("file") => image = Some(read_image_field(field, max_bytes).await?),
            Some("title") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read title: {e}")))?;
                title = Some(text);
            }
            Some("user_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read user id: {e}")))?;
                user_id = Some(text);
            }
            _ => {} // Ignore unknown fields.
        }
    }

    let image = image.ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.into()))?;
    let title = normalize_title(title.as_deref().unwrap_or(""))
        .ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.into()))?;

    let user_id = user_id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    let key = format!(
        "{}/{}.{}",
        user_segment(&user_id),
        Uuid::new_v4(),
        image.extension
    );

    publisher
        .store
        .put(&key, &image.content_type, image.data)
        .await?;
    let image_url = publisher.store.public_url(&key);

    let record = publisher
        .catalog
        .insert(NewArtwork {
            title,
            image_url,
            user_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ArtworkResponse::from(record))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Artworks",
    operation_id = "listArtworks",
    summary = "List the gallery",
    description = "Returns every artwork, ordered by id ascending. When the table is empty or \
        unreachable, falls back to listing the storage bucket and synthesizing records from \
        object names.",
    responses(
        (status = 200, description = "Gallery listing", body = GalleryResponse),
        (status = 502, description = "Backend failure (UPSTREAM_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_artworks(
    State(state): State<AppState>,
) -> Result<Json<GalleryResponse>, AppError> {
    Ok(Json(fetch_gallery(&state).await?))
}

/// Fetch the gallery, preferring the metadata table and falling back
/// to the bucket listing when the table errors or has no rows.
pub(crate) async fn fetch_gallery(state: &AppState) -> Result<GalleryResponse, AppError> {
    match state.catalog.list().await {
        Ok(records) if !records.is_empty() => Ok(GalleryResponse::from_records(records)),
        Ok(_) => synthesize_from_storage(state).await,
        Err(err) => {
            tracing::warn!("Error fetching artworks: {err}; falling back to bucket listing");
            synthesize_from_storage(state).await
        }
    }
}

/// List the bucket and synthesize display records from object names.
/// Keys take the `{user}/{name}` shape, so one folder level is enough.
async fn synthesize_from_storage(state: &AppState) -> Result<GalleryResponse, AppError> {
    let mut artworks = Vec::new();
    for entry in state.store.list("").await? {
        if entry.is_folder() {
            for object in state.store.list(&entry.name).await? {
                if !object.is_folder() {
                    let key = format!("{}/{}", entry.name, object.name);
                    artworks.push(synthesized(state, &entry.name, &object, &key));
                }
            }
        } else {
            let key = entry.name.clone();
            artworks.push(synthesized(state, "", &entry, &key));
        }
    }

    let total = artworks.len() as u64;
    Ok(GalleryResponse {
        artworks,
        total,
        source: GallerySource::Storage,
    })
}

/// Display record for a raw object; the filename stem stands in for
/// the missing title.
fn synthesized(
    state: &AppState,
    owner: &str,
    object: &StoredObject,
    key: &str,
) -> ArtworkResponse {
    let title = object
        .name
        .rsplit_once('.')
        .map_or(object.name.as_str(), |(stem, _)| stem)
        .to_string();

    ArtworkResponse {
        id: None,
        title,
        image_url: state.store.public_url(key),
        user_id: owner.to_string(),
        created_at: None,
    }
}

/// Read the `file` field, walking the validation checklist before the
/// bytes are accepted: image content type, size cap enforced
/// chunk-by-chunk, allow-listed extension.
async fn read_image_field(
    mut field: axum::extract::multipart::Field<'_>,
    max_bytes: u64,
) -> Result<ImageUpload, AppError> {
    let file_name = field
        .file_name()
        .map(|s| s.to_string())
        .ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.into()))?;

    let content_type = field
        .content_type()
        .map(|m| m.to_string())
        .or_else(|| {
            mime_guess::from_path(&file_name)
                .first()
                .map(|m| m.to_string())
        })
        .ok_or_else(|| AppError::Validation(UNSUPPORTED_TYPE_MESSAGE.into()))?;
    if !is_image_content_type(&content_type) {
        return Err(AppError::Validation(UNSUPPORTED_TYPE_MESSAGE.into()));
    }

    let mut data = Vec::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::Validation(format!("Upload read error: {e}")))?
    {
        if (data.len() + chunk.len()) as u64 > max_bytes {
            return Err(AppError::Validation(size_limit_message(max_bytes)));
        }
        data.extend_from_slice(&chunk);
    }

    let extension = image_extension(&file_name).ok_or_else(|| {
        AppError::Validation(format!(
            "Unsupported image extension (allowed: {})",
            ALLOWED_EXTENSIONS.join(", ")
        ))
    })?;

    Ok(ImageUpload {
        content_type,
        extension,
        data,
    })
}
