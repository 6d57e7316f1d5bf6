//! Generation client for MVP scope documents

use crate::client::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, ModelBackend};
use crate::error::{GenerationError, Result};
use crate::provider::GeminiProvider;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Message returned when no backend could be constructed
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Gemini AI service is not properly configured. Please check API key and server logs.";

/// Shared handle to the remote model.
///
/// A client without a backend is non-operational: every call fails fast with
/// [`GenerationError::Unavailable`].
#[derive(Clone)]
pub struct GenerationClient {
    backend: Option<Arc<dyn ModelBackend>>,
    model_name: String,
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("backend", &self.backend.as_ref().map(|b| b.name().to_string()))
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl GenerationClient {
    /// Create a client over an optional backend
    pub fn new(backend: Option<Arc<dyn ModelBackend>>, model_name: impl Into<String>) -> Self {
        Self {
            backend,
            model_name: model_name.into(),
        }
    }

    /// Create an operational client
    pub fn with_backend(backend: Arc<dyn ModelBackend>, model_name: impl Into<String>) -> Self {
        Self::new(Some(backend), model_name)
    }

    /// Create a non-operational client
    pub fn unconfigured(model_name: impl Into<String>) -> Self {
        Self::new(None, model_name)
    }

    /// Build a Gemini-backed client.
    ///
    /// Construction failures are logged and leave the client non-operational
    /// instead of aborting startup.
    pub fn from_gemini(api_key: &str, model_name: &str, base_url: &str) -> Self {
        match GeminiProvider::with_base_url(
            api_key.to_string(),
            model_name.to_string(),
            base_url.to_string(),
        ) {
            Ok(provider) => {
                info!("Generation client initialized with model: {}", model_name);
                Self::with_backend(Arc::new(provider), model_name)
            }
            Err(e) => {
                error!(
                    "Failed to initialize Gemini model ({}), service will be non-operational: {}",
                    model_name, e
                );
                Self::unconfigured(model_name)
            }
        }
    }

    /// Whether a backend is available
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Model name this client was configured with
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Generate text for `prompt`.
    ///
    /// The remote call runs as its own task on the runtime's worker pool, so
    /// a slow generation never stalls other requests. Dropping the returned
    /// future does not cancel the call.
    pub async fn generate(&self, prompt: String, config: &GenerationConfig) -> Result<String> {
        let backend = match &self.backend {
            Some(backend) => Arc::clone(backend),
            None => {
                error!("Generation requested but the model is not initialized");
                return Err(GenerationError::Unavailable(NOT_CONFIGURED_MESSAGE.to_string()));
            }
        };

        let request = GenerateContentRequest::new(prompt, config);
        let task = tokio::spawn(async move { backend.generate_content(request).await });

        let response = match task.await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!("Gemini call failed: {}", e);
                return Err(e.into());
            }
            Err(join_err) => {
                error!("Gemini call aborted unexpectedly: {}", join_err);
                return Err(GenerationError::Unavailable(format!(
                    "An unexpected internal error occurred while contacting the Gemini service: {}",
                    join_err
                )));
            }
        };

        interpret_response(response)
    }
}

/// Turn a provider answer into generated text or a rejection
pub fn interpret_response(response: GenerateContentResponse) -> Result<String> {
    let Some(candidate) = response.candidates.first() else {
        let msg = match response.block_reason() {
            Some(reason) => blocked_message(reason),
            None => "Content generation blocked by AI provider.".to_string(),
        };
        warn!("{}", msg);
        return Err(GenerationError::Rejected(msg));
    };

    let Some(text) = response.text() else {
        let msg = match candidate.finish_reason.as_deref() {
            Some(reason) if reason != "STOP" => blocked_message(reason),
            _ => "AI service returned a malformed response.".to_string(),
        };
        warn!("Gemini returned a candidate without text: {}", msg);
        return Err(GenerationError::Rejected(msg));
    };

    let text = text.trim();
    if text.is_empty() {
        warn!("Received an empty text response from Gemini");
        return Err(GenerationError::Rejected(
            "AI service returned an empty response.".to_string(),
        ));
    }

    info!("Processed Gemini response, content length: {}", text.len());
    Ok(text.to_string())
}

fn blocked_message(reason: &str) -> String {
    format!(
        "Content generation blocked due to safety policy: {}. Consider revising the input idea or industry if it might violate content policies.",
        reason
    )
}
