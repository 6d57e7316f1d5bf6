//! MVP scope generation
//!
//! - prompt_templates: the fixed consultant prompt and its section list
//! - scope_generator: the generation client that calls the model and
//!   classifies its answer
//!
//! # Example
//! ```no_run
//! use aura_llm::{build_prompt, GenerationClient, GenerationConfig, MockProvider};
//! use std::sync::Arc;
//!
//! # async fn example() -> aura_llm::Result<()> {
//! let client = GenerationClient::with_backend(Arc::new(MockProvider::new()), "mock-model");
//! let prompt = build_prompt(
//!     "Health & Wellness Technology",
//!     "An AI-powered fitness coaching app with personalized workout plans.",
//! );
//! let scope = client.generate(prompt, &GenerationConfig::scope_default()).await?;
//!
//! println!("{}", scope);
//! # Ok(())
//! # }
//! ```

pub mod prompt_templates;
pub mod scope_generator;

// Re-export main types
pub use prompt_templates::{build_prompt, SCOPE_GENERATION_PROMPT, SCOPE_SECTIONS};
pub use scope_generator::{interpret_response, GenerationClient, NOT_CONFIGURED_MESSAGE};
