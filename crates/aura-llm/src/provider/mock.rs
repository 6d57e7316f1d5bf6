//! Mock model backend for testing

use crate::client::{GenerateContentRequest, GenerateContentResponse, ModelBackend};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted backend that answers every call with the same outcome
pub struct MockProvider {
    name: String,
    outcome: Result<GenerateContentResponse, ProviderError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    completed: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockProvider {
    /// Create a new mock provider answering with a generic document
    pub fn new() -> Self {
        Self::with_response(GenerateContentResponse::from_text("Mock LLM response"))
    }

    /// Create with a custom text answer
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_response(GenerateContentResponse::from_text(text))
    }

    /// Create with a custom raw response
    pub fn with_response(response: GenerateContentResponse) -> Self {
        Self {
            name: "mock".to_string(),
            outcome: Ok(response),
            delay: None,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Create a provider whose calls always fail
    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            ..Self::new()
        }
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of calls that ran to completion
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Prompt of the most recent call
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelBackend for MockProvider {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_prompt.lock() {
            *guard = request.prompt().map(str::to_string);
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.completed.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
