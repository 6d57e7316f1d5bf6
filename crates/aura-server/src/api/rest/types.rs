//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::config::Settings;
use aura_llm::{GenerationClient, GenerationConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Static facts about the running service
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub project_name: String,
    pub version: String,
    pub environment: String,
    pub api_prefix: String,
}

impl ServiceInfo {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            project_name: settings.project_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: settings.environment.clone(),
            api_prefix: settings.api_prefix.clone(),
        }
    }

    pub fn openapi_url(&self) -> String {
        format!("{}/openapi.json", self.api_prefix)
    }
}

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub generator: GenerationClient,
    pub generation_config: Arc<GenerationConfig>,
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(generator: GenerationClient, generation_config: GenerationConfig, info: ServiceInfo) -> Self {
        Self {
            generator,
            generation_config: Arc::new(generation_config),
            info: Arc::new(info),
        }
    }

    /// State for a server built from settings
    pub fn from_settings(generator: GenerationClient, settings: &Settings) -> Self {
        Self::new(
            generator,
            GenerationConfig::scope_default().with_max_output_tokens(settings.max_output_tokens),
            ServiceInfo::from_settings(settings),
        )
    }
}

/// Validated scope request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRequest {
    /// Core startup idea (10..=1000 characters)
    pub idea: String,
    /// Target industry (3..=100 characters)
    pub industry: String,
}

/// Successful scope generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeResponse {
    pub generated_scope: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Root endpoint response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub project_name: String,
    pub version: String,
    pub environment: String,
    pub message: String,
    pub api_prefix: String,
    pub openapi_url: String,
}
