use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::artwork::{
    self, __path_list_artworks, __path_upload_artwork, list_artworks, upload_artwork,
};
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/artworks", artwork_routes())
}

fn artwork_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_artworks, upload_artwork))
        .layer(artwork::upload_body_limit())
}
