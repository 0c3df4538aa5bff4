//! Standalone knowledge API server (without Dioxus frontend)
//! Use this for API-only testing or backend development.
//!
//! Run with: PORT=3003 cargo run --bin server --features server

use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use knowledge_base_console::config::AppConfig;
use knowledge_base_console::handlers::api_router;
use knowledge_base_console::infrastructure::global_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Knowledge Base Console API Server (standalone)...");

    let config = AppConfig::from_env();
    tracing::info!(
        "Serving {} knowledge bases from {}",
        global_store().len(),
        config.knowledge_data_path.display()
    );

    let app = api_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.api_port));
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
