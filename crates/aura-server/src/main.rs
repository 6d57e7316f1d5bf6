//! Aura MVP Scope Generator HTTP Server
//!
//! Provides a REST API that turns startup ideas into MVP scope documents.

use anyhow::Result;
use aura_server::api::{self, AppState};
use aura_server::config::{LogFormat, Settings};
use aura_server::{generation, telemetry};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration; a missing credential stops startup
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            telemetry::init_tracing(LogFormat::Text, false)?;
            error!("Could not load application settings: {:#}", e);
            return Err(e);
        }
    };

    // Initialize tracing
    telemetry::init_tracing(settings.log_format, settings.is_development())?;
    info!(
        "Application settings loaded for '{}'. Environment: {}",
        settings.project_name, settings.environment
    );

    // Initialize generation client
    let generator = generation::init_generation_client(&settings);

    let state = AppState::from_settings(generator, &settings);
    let openapi_url = state.info.openapi_url();
    let app = api::create_router(state, &settings);

    // Start server
    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!(
        "'{}' (v{}) application startup complete",
        settings.project_name,
        env!("CARGO_PKG_VERSION")
    );
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Scope API: POST http://{}{}/generate-scope", addr, settings.api_prefix);
    info!("  OpenAPI: http://{}{}", addr, openapi_url);

    axum::serve(listener, app).await?;

    Ok(())
}
