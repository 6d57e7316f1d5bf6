//! Router creation and configuration
//!
//! Creates the Axum router for REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use crate::config::Settings;
use crate::error::ApiError;
use axum::{
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    let generate_path = format!("{}/generate-scope", state.info.api_prefix);
    let openapi_path = state.info.openapi_url();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(&openapi_path, get(openapi))
        .route(&generate_path, post(generate_scope))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(settings))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy: anything goes in development, a fixed origin list elsewhere
fn cors_layer(settings: &Settings) -> CorsLayer {
    if settings.is_development() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins()
        .into_iter()
        .filter(|origin| {
            // `AllowOrigin::list` panics on a wildcard entry
            let wildcard = origin == "*";
            if wildcard {
                tracing::warn!("Ignoring wildcard CORS origin outside development");
            }
            !wildcard
        })
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Convert a handler panic into a generic 500
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}
