use anyhow::Context;
use tracing::{info, warn};

use server::config::AppConfig;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context(
        "Set SUPABASE_URL and SUPABASE_ANON_KEY in config/secrets.toml or the environment",
    )?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::from_config(config).context("Failed to build Supabase clients")?;

    if state.publisher.is_none() {
        warn!("SUPABASE_SERVICE_ROLE_KEY is not set; uploads are disabled");
    }

    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Gallery running at http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
