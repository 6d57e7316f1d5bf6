//! Server error types

use aura_llm::GenerationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic detail for unexpected failures; the cause is only logged
pub const INTERNAL_ERROR_DETAIL: &str =
    "An unexpected internal server error occurred. The technical team has been notified.";

/// Detail returned when generation succeeded with nothing to show
pub const EMPTY_SCOPE_DETAIL: &str = "AI service (Gemini) failed to generate meaningful content.";

/// One segment of an error location: a field name or an index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocItem {
    Key(String),
    Index(usize),
}

impl From<&str> for LocItem {
    fn from(key: &str) -> Self {
        LocItem::Key(key.to_string())
    }
}

impl From<usize> for LocItem {
    fn from(index: usize) -> Self {
        LocItem::Index(index)
    }
}

/// Field-level error description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub loc: Vec<LocItem>,
    pub msg: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ErrorDetail {
    pub fn new(loc: Vec<LocItem>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: Some(kind.into()),
        }
    }
}

/// `detail` is either a message or a list of field errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Message(String),
    Fields(Vec<ErrorDetail>),
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub detail: Detail,
}

impl ErrorEnvelope {
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            detail: Detail::Message(msg.into()),
        }
    }

    pub fn fields(details: Vec<ErrorDetail>) -> Self {
        Self {
            detail: Detail::Fields(details),
        }
    }
}

/// Server error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation (422)
    #[error("Validation error: {} invalid field(s)", .0.len())]
    Validation(Vec<ErrorDetail>),

    /// Provider refused or returned unusable content (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Provider cannot serve right now (503)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Anything unanticipated (500); the message is logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generation succeeded without usable text (500)
    #[error("Internal error: {}", EMPTY_SCOPE_DETAIL)]
    EmptyScope,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) | ApiError::EmptyScope => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope sent to the caller
    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            ApiError::Validation(details) => ErrorEnvelope::fields(details.clone()),
            ApiError::BadRequest(msg) | ApiError::ServiceUnavailable(msg) => {
                ErrorEnvelope::message(msg.clone())
            }
            ApiError::Internal(_) => ErrorEnvelope::message(INTERNAL_ERROR_DETAIL),
            ApiError::EmptyScope => ErrorEnvelope::message(EMPTY_SCOPE_DETAIL),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(msg) = &self {
            tracing::error!("Unexpected internal error: {}", msg);
        }
        (self.status(), Json(self.envelope())).into_response()
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Unavailable(msg) => ApiError::ServiceUnavailable(msg),
            GenerationError::Rejected(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unavailable_maps_to_503() {
        let err: ApiError = GenerationError::Unavailable("quota".to_string()).into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.envelope(), ErrorEnvelope::message("quota"));
    }

    #[test]
    fn test_rejected_maps_to_400() {
        let err: ApiError = GenerationError::Rejected("blocked".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.envelope(), ErrorEnvelope::message("blocked"));
    }

    #[test]
    fn test_internal_does_not_leak() {
        let err = ApiError::Internal("db password wrong at /etc/secret".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.envelope(), ErrorEnvelope::message(INTERNAL_ERROR_DETAIL));
        assert!(err.to_string().contains("/etc/secret"));
    }

    #[test]
    fn test_empty_scope_is_500() {
        let err = ApiError::EmptyScope;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.envelope(), ErrorEnvelope::message(EMPTY_SCOPE_DETAIL));
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let err: ApiError = anyhow::anyhow!("something went wrong").into();
        assert!(err.to_string().contains("something went wrong"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_envelope_shape() {
        let err = ApiError::Validation(vec![ErrorDetail::new(
            vec!["body".into(), "idea".into()],
            "Field required",
            "missing",
        )]);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            serde_json::to_value(err.envelope()).unwrap(),
            json!({"detail": [{"loc": ["body", "idea"], "msg": "Field required", "type": "missing"}]})
        );
    }

    #[test]
    fn test_loc_accepts_indices() {
        let detail = ErrorDetail::new(vec!["body".into(), 3usize.into()], "bad", "json_invalid");
        assert_eq!(serde_json::to_value(&detail).unwrap()["loc"], json!(["body", 3]));
    }

    #[test]
    fn test_message_envelope_shape() {
        assert_eq!(
            serde_json::to_value(ErrorEnvelope::message("nope")).unwrap(),
            json!({"detail": "nope"})
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::ServiceUnavailable("down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiError>();
    }
}
