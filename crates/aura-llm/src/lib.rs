//! Aura LLM Integration
//!
//! Gemini integration for the Aura MVP scope generator:
//! - Prompt building: render a startup idea into the scope document prompt
//! - Generation: call the model off the request path and classify the answer
//!   as text, `Unavailable` or `Rejected`
//!
//! Providers implement [`ModelBackend`]; [`MockProvider`] is a scripted
//! backend for tests.

// Re-export core types
pub use client::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    HarmBlockThreshold, HarmCategory, ModelBackend, Part, PromptFeedback, SafetySetting,
    SamplingConfig,
};
pub use error::{GenerationError, ProviderError, Result};

// Re-export providers
pub use provider::{GeminiProvider, MockProvider, DEFAULT_BASE_URL};

// Re-export generators
pub use generator::{
    build_prompt, interpret_response, GenerationClient, NOT_CONFIGURED_MESSAGE,
    SCOPE_GENERATION_PROMPT, SCOPE_SECTIONS,
};

pub mod client;
pub mod error;
pub mod generator;
pub mod provider;
