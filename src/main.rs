use anyhow::Result;
use avatar_chat::{create_router, AppState, BackendClient, Config};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = Config::load("config/avatar-chat")?;

    info!("{} v0.1.0", cfg.service.name);
    info!("Backend at {}", cfg.backend.base_url);
    info!("Media server at {}", cfg.media.url);
    info!(
        "Transcript save timeout: {:?}",
        cfg.session().save_timeout
    );

    let backend = Arc::new(BackendClient::new(&cfg.backend.base_url));
    let state = AppState::new(backend.clone(), backend);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
