mod config;
mod errors;
mod estimate;
mod layout;
mod naming;
mod render;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::default_report_config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting namer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        file_formats = config.catalog.file_formats.len(),
        video_formats = config.catalog.video_formats.len(),
        "Format catalog loaded"
    );
    for key in &config.defaulted {
        info!("{key} not set, using defaults");
    }

    // A4 portrait, Helvetica cards
    let report_config = default_report_config();
    info!(
        "Report page {:.1}x{:.1}pt",
        report_config.page.width, report_config.page.height
    );

    let state = AppState::new(config.clone(), report_config);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
