//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::JsonExtractor;
use super::types::*;
use super::validation::{
    validate_idea_request, IDEA_MAX_CHARS, IDEA_MIN_CHARS, INDUSTRY_MAX_CHARS, INDUSTRY_MIN_CHARS,
};
use crate::error::ApiError;
use aura_llm::{build_prompt, GenerationClient, GenerationConfig};
use axum::{extract::State, Json};
use serde_json::json;
use tracing::{debug, error, info, warn};

/// Root endpoint with basic service information
pub(super) async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    info!("Root endpoint '/' accessed for '{}'", state.info.project_name);

    let openapi_url = state.info.openapi_url();
    Json(RootResponse {
        project_name: state.info.project_name.clone(),
        version: state.info.version.clone(),
        environment: state.info.environment.clone(),
        message: format!(
            "Welcome! API is operational. Visit '{}' for the API description.",
            openapi_url
        ),
        api_prefix: state.info.api_prefix.clone(),
        openapi_url,
    })
}

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    debug!("Health check endpoint '/health' accessed");
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "API is operational and ready to serve requests.".to_string(),
    })
}

/// OpenAPI description of the routes
pub(super) async fn openapi(State(state): State<AppState>) -> Json<serde_json::Value> {
    let error_content =
        json!({"application/json": {"schema": {"$ref": "#/components/schemas/ErrorResponse"}}});
    let error_response = |description: &str| json!({"description": description, "content": error_content});

    let generate_scope = json!({
        "post": {
            "tags": ["AI Scope Generation"],
            "summary": "Generate MVP Scope Document (using Google Gemini AI)",
            "requestBody": {
                "required": true,
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/IdeaInput"}}}
            },
            "responses": {
                "200": {
                    "description": "Successfully generated MVP scope document.",
                    "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ScopeOutput"}}}
                },
                "400": error_response("Content policy violation by AI."),
                "422": error_response("Validation error in the request body."),
                "500": error_response("An unexpected internal server error occurred."),
                "503": error_response("AI service (Gemini) is unavailable (e.g., quota, permission).")
            }
        }
    });

    let mut paths = serde_json::Map::new();
    paths.insert(format!("{}/generate-scope", state.info.api_prefix), generate_scope);
    paths.insert(
        "/health".to_string(),
        json!({"get": {"tags": ["General"], "summary": "API Health Check"}}),
    );
    paths.insert(
        "/".to_string(),
        json!({"get": {"tags": ["General"], "summary": "API Root Endpoint"}}),
    );

    let idea_input = json!({
        "type": "object",
        "required": ["idea", "industry"],
        "properties": {
            "idea": {"type": "string", "minLength": IDEA_MIN_CHARS, "maxLength": IDEA_MAX_CHARS},
            "industry": {"type": "string", "minLength": INDUSTRY_MIN_CHARS, "maxLength": INDUSTRY_MAX_CHARS}
        }
    });
    let error_detail = json!({
        "type": "object",
        "required": ["loc", "msg"],
        "properties": {
            "loc": {"type": "array", "items": {"oneOf": [{"type": "string"}, {"type": "integer"}]}},
            "msg": {"type": "string"},
            "type": {"type": "string"}
        }
    });
    let error_envelope = json!({
        "type": "object",
        "required": ["detail"],
        "properties": {
            "detail": {
                "oneOf": [
                    {"type": "string"},
                    {"type": "array", "items": {"$ref": "#/components/schemas/ErrorDetail"}}
                ]
            }
        }
    });

    Json(json!({
        "openapi": "3.1.0",
        "info": {
            "title": state.info.project_name,
            "version": state.info.version,
            "description": "API backend for generating Minimum Viable Product (MVP) scope documents for startup ideas using Google's Gemini Large Language Model."
        },
        "paths": paths,
        "components": {
            "schemas": {
                "IdeaInput": idea_input,
                "ScopeOutput": {
                    "type": "object",
                    "required": ["generated_scope"],
                    "properties": {"generated_scope": {"type": "string"}}
                },
                "ErrorDetail": error_detail,
                "ErrorResponse": error_envelope
            }
        }
    }))
}

/// Scope generation endpoint
#[axum::debug_handler]
pub(super) async fn generate_scope(
    State(state): State<AppState>,
    JsonExtractor(body): JsonExtractor<serde_json::Value>,
) -> Result<Json<ScopeResponse>, ApiError> {
    let request = validate_idea_request(&body).map_err(|details| {
        warn!("Request validation failed: {:?}", details);
        ApiError::Validation(details)
    })?;

    generate_scope_for(&state.generator, &state.generation_config, request)
        .await
        .map(Json)
}

/// Build the prompt, call the model and map the outcome
pub async fn generate_scope_for(
    generator: &GenerationClient,
    config: &GenerationConfig,
    request: IdeaRequest,
) -> Result<ScopeResponse, ApiError> {
    info!(
        "Generating scope: industry='{}', idea='{}'",
        request.industry,
        preview(&request.idea)
    );

    let prompt = build_prompt(&request.industry, &request.idea);

    match generator.generate(prompt, config).await {
        Ok(text) if text.trim().is_empty() => {
            error!("Generation client returned empty or whitespace-only content");
            Err(ApiError::EmptyScope)
        }
        Ok(text) => Ok(ScopeResponse {
            generated_scope: text,
        }),
        Err(e) => {
            let err = ApiError::from(e);
            match &err {
                ApiError::ServiceUnavailable(msg) => error!("Scope generation unavailable: {}", msg),
                _ => warn!("Scope generation rejected: {}", err),
            }
            Err(err)
        }
    }
}

/// First 70 characters of an idea, for logs
fn preview(idea: &str) -> String {
    const MAX_CHARS: usize = 70;
    if idea.chars().count() <= MAX_CHARS {
        idea.to_string()
    } else {
        let head: String = idea.chars().take(MAX_CHARS).collect();
        format!("{}...", head)
    }
}
