//! Model provider implementations

mod gemini;
mod mock;

pub use gemini::{GeminiProvider, DEFAULT_BASE_URL};
pub use mock::MockProvider;
