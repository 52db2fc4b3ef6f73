use axum::extract::State;
use axum::response::Html;
use tracing::instrument;

use crate::pages::render_gallery_page;
use crate::state::AppState;

/// Server-rendered gallery page. Listing failures are rendered inline
/// so the page stays interactive.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let uploads_enabled = state.publisher.is_some();
    let gallery = super::artwork::fetch_gallery(&state).await;
    Html(render_gallery_page(uploads_enabled, &gallery))
}
