//! Generation client initialization
//!
//! Builds the single shared Gemini client from settings. A client that cannot
//! be built leaves the service running in a non-operational state; requests
//! then fail with 503 instead of the process refusing to start.

use crate::config::Settings;
use aura_llm::GenerationClient;
use tracing::{info, warn};

/// Initialize the generation client
pub fn init_generation_client(settings: &Settings) -> GenerationClient {
    let client = GenerationClient::from_gemini(
        settings.gemini_api_key(),
        &settings.gemini_model_name,
        &settings.gemini_base_url,
    );

    if client.is_configured() {
        info!("Gemini model '{}' ready", client.model_name());
    } else {
        warn!("Gemini client is not operational; scope generation will return 503");
    }

    if settings.has_openai_key() {
        info!("OpenAI API key found (optional feature)");
    } else {
        info!("OpenAI API key not found (optional feature not configured)");
    }

    client
}
