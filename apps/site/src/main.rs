mod config;
mod dom;
mod errors;
mod loader;
mod markup;
mod models;
mod page;
mod render;
mod routes;
mod state;
mod theme;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::loader::{DataSource, FileSource, HttpSource};
use crate::routes::build_router;
use crate::state::AppState;
use crate::theme::ThemeStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting résumé site v{}", env!("CARGO_PKG_VERSION"));

    let source: Arc<dyn DataSource> = match &config.data_url {
        Some(url) => Arc::new(HttpSource::new(url.clone())),
        None => Arc::new(FileSource::new(config.data_path.clone())),
    };
    info!("Résumé document source: {}", source.describe());

    let theme_store = ThemeStore::new(config.theme_path.clone());
    let state = AppState::new(config.clone(), source, theme_store);
    info!("Theme preference: {}", *state.theme.read().await);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
