//! REST API implementation
//!
//! Modular REST API with clean separation of concerns:
//! - types: Request/response type definitions and application state
//! - validation: Field checks for the scope request body
//! - extractors: Custom request extractors
//! - handlers: API endpoint handlers
//! - router: Router creation, CORS and panic handling
//! - tests: Unit tests for all components

mod extractors;
mod handlers;
mod router;
pub mod types;
pub mod validation;

// Re-export public API
pub use extractors::JsonExtractor;
pub use handlers::generate_scope_for;
pub use router::create_router;
pub use types::{
    AppState, HealthResponse, IdeaRequest, RootResponse, ScopeResponse, ServiceInfo,
};
