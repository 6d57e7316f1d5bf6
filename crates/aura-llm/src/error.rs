//! Error types for the Aura LLM module

use thiserror::Error;

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Raw failure reported by a model backend
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Provider-side quota or rate limit hit
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Credential rejected or missing permissions
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Any other non-success answer from the provider API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Request never completed (DNS, TLS, connection reset, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// Provider answered 2xx but the body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Message reported by the provider, without the classification prefix
    pub fn message(&self) -> &str {
        match self {
            ProviderError::QuotaExceeded(msg)
            | ProviderError::PermissionDenied(msg)
            | ProviderError::Transport(msg)
            | ProviderError::Decode(msg) => msg,
            ProviderError::Api { message, .. } => message,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

/// Classified outcome of a failed generation.
///
/// `Unavailable` is retryable or needs operator attention; `Rejected` means
/// the provider served the request but the caller should revise the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Rejected(String),
}

impl GenerationError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, GenerationError::Unavailable(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, GenerationError::Rejected(_))
    }
}

impl From<ProviderError> for GenerationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::QuotaExceeded(msg) => GenerationError::Unavailable(format!(
                "Gemini API quota exceeded. Please check your Google Cloud project billing and limits. Details: {}",
                msg
            )),
            ProviderError::PermissionDenied(msg) => GenerationError::Unavailable(format!(
                "Gemini API permission denied. Ensure API key is valid and has Vertex AI permissions. Details: {}",
                msg
            )),
            ProviderError::Api { message, .. } => GenerationError::Unavailable(format!(
                "An error occurred with the Gemini API: {}",
                message
            )),
            ProviderError::Transport(msg) | ProviderError::Decode(msg) => {
                GenerationError::Unavailable(format!(
                    "An unexpected internal error occurred while contacting the Gemini service: {}",
                    msg
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_maps_to_unavailable_with_details() {
        let err: GenerationError =
            ProviderError::QuotaExceeded("Resource has been exhausted".to_string()).into();
        assert!(err.is_unavailable());
        assert!(err.to_string().starts_with("Gemini API quota exceeded."));
        assert!(err.to_string().ends_with("Details: Resource has been exhausted"));
    }

    #[test]
    fn test_permission_maps_to_unavailable() {
        let err: GenerationError =
            ProviderError::PermissionDenied("API key not valid".to_string()).into();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("permission denied"));
        assert!(err.to_string().contains("API key not valid"));
    }

    #[test]
    fn test_api_error_maps_to_unavailable() {
        let err: GenerationError = ProviderError::Api {
            status: 500,
            message: "Internal error encountered.".to_string(),
        }
        .into();
        assert_eq!(
            err,
            GenerationError::Unavailable(
                "An error occurred with the Gemini API: Internal error encountered.".to_string()
            )
        );
    }

    #[test]
    fn test_transport_error_keeps_original_message() {
        let err: GenerationError =
            ProviderError::Transport("connection reset by peer".to_string()).into();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("connection reset by peer"));
    }

    #[test]
    fn test_provider_message_strips_prefix() {
        let err = ProviderError::Api {
            status: 400,
            message: "bad model".to_string(),
        };
        assert_eq!(err.message(), "bad model");
        assert_eq!(err.to_string(), "API error (400): bad model");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProviderError>();
        assert_send_sync::<GenerationError>();
    }
}
