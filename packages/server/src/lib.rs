pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod routes;
pub mod state;
pub mod utils;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Creative Showcase API",
        version = "1.0.0",
        description = "API for the Creative Showcase image gallery"
    ),
    tags(
        (name = "Artworks", description = "Artwork upload and gallery listing"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_routes())
        .split_for_parts();

    router
        .route("/", axum::routing::get(handlers::pages::index))
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
}

fn cors_layer(config: &crate::config::CorsConfig) -> CorsLayer {
    let origins: Vec<axum::http::HeaderValue> = config
        .allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
        .max_age(std::time::Duration::from_secs(config.max_age))
}

/// Render an otherwise-unhandled panic as an error response instead of
/// tearing down the connection. The page stays interactive after any
/// failure.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {detail}");

    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(crate::error::ErrorBody {
            code: "INTERNAL_ERROR",
            message: format!("An unexpected error occurred: {detail}"),
        }),
    )
        .into_response()
}
