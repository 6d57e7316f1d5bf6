//! Unit tests for ApiError responses

use aura_llm::{GenerationError, ProviderError};
use aura_server::error::{ApiError, ErrorDetail, EMPTY_SCOPE_DETAIL, INTERNAL_ERROR_DETAIL};
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};

/// Render an error and return status plus parsed body
fn render(error: ApiError) -> (StatusCode, Option<String>, Value) {
    let response = error.into_response();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = tokio_test::block_on(response.into_body().collect())
        .unwrap()
        .to_bytes();
    (status, content_type, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_bad_request_response() {
    let (status, content_type, body) =
        render(ApiError::BadRequest("Content generation blocked".to_string()));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, json!({"detail": "Content generation blocked"}));
}

#[test]
fn test_service_unavailable_response() {
    let (status, _, body) = render(ApiError::ServiceUnavailable("try later".to_string()));

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"detail": "try later"}));
}

#[test]
fn test_internal_response_hides_cause() {
    let (status, _, body) = render(ApiError::Internal("stack trace at line 42".to_string()));

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": INTERNAL_ERROR_DETAIL}));
    assert!(!body.to_string().contains("line 42"));
}

#[test]
fn test_empty_scope_response() {
    let (status, _, body) = render(ApiError::EmptyScope);

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], EMPTY_SCOPE_DETAIL);
}

#[test]
fn test_validation_response() {
    let (status, _, body) = render(ApiError::Validation(vec![
        ErrorDetail::new(
            vec!["body".into(), "idea".into()],
            "String should have at least 10 characters",
            "string_too_short",
        ),
        ErrorDetail::new(
            vec!["body".into(), "industry".into()],
            "Field required",
            "missing",
        ),
    ]));

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"detail": [
            {"loc": ["body", "idea"], "msg": "String should have at least 10 characters", "type": "string_too_short"},
            {"loc": ["body", "industry"], "msg": "Field required", "type": "missing"}
        ]})
    );
}

#[test]
fn test_provider_failures_map_to_status() {
    let cases = vec![
        (
            ProviderError::QuotaExceeded("per minute".to_string()),
            StatusCode::SERVICE_UNAVAILABLE,
            "Gemini API quota exceeded.",
        ),
        (
            ProviderError::PermissionDenied("bad key".to_string()),
            StatusCode::SERVICE_UNAVAILABLE,
            "Gemini API permission denied.",
        ),
        (
            ProviderError::Api {
                status: 500,
                message: "backend error".to_string(),
            },
            StatusCode::SERVICE_UNAVAILABLE,
            "An error occurred with the Gemini API:",
        ),
    ];

    for (provider_error, expected_status, prefix) in cases {
        let error: ApiError = GenerationError::from(provider_error).into();
        let (status, _, body) = render(error);

        assert_eq!(status, expected_status);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with(prefix), "detail: {}", detail);
    }
}

#[test]
fn test_rejection_maps_to_bad_request() {
    let error: ApiError = GenerationError::Rejected("blocked".to_string()).into();
    let (status, _, body) = render(error);

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "blocked"}));
}

#[test]
fn test_error_display() {
    assert_eq!(
        ApiError::BadRequest("nope".to_string()).to_string(),
        "Bad request: nope"
    );
    assert_eq!(
        ApiError::ServiceUnavailable("later".to_string()).to_string(),
        "Service unavailable: later"
    );
    assert!(ApiError::Validation(vec![])
        .to_string()
        .starts_with("Validation error"));
}
