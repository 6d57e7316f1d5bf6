//! Google Gemini provider implementation

use crate::client::{GenerateContentRequest, GenerateContentResponse, ModelBackend};
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Public Gemini REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini provider
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider against the public endpoint
    pub fn new(api_key: String, model: String) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL.to_string())
    }

    /// Create with custom base URL (e.g., a proxy or a test server)
    pub fn with_base_url(
        api_key: String,
        model: String,
        base_url: String,
    ) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::PermissionDenied(
                "Gemini API key is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| ProviderError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// Map a non-success answer to a classified provider error.
///
/// Google APIs report failures as `{"error": {"code", "message", "status"}}`.
fn classify_failure(status: StatusCode, body: &str) -> ProviderError {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let error = parsed.as_ref().map(|v| &v["error"]);

    let message = error
        .and_then(|e| e["message"].as_str())
        .map(str::to_string)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body.trim().to_string()
            }
        });
    let api_status = error.and_then(|e| e["status"].as_str()).unwrap_or_default();

    match (status, api_status) {
        (StatusCode::TOO_MANY_REQUESTS, _) | (_, "RESOURCE_EXHAUSTED") => {
            ProviderError::QuotaExceeded(message)
        }
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _)
        | (_, "PERMISSION_DENIED")
        | (_, "UNAUTHENTICATED") => ProviderError::PermissionDenied(message),
        _ => ProviderError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl ModelBackend for GeminiProvider {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        tracing::debug!(model = %self.model, "Calling Gemini generateContent");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("Gemini API call failed: {}", e)))?;

        let status = resp.status();
        let resp_text = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(classify_failure(status, &resp_text));
        }

        serde_json::from_str(&resp_text)
            .map_err(|e| ProviderError::Decode(format!("Failed to parse response: {}", e)))
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GenerationConfig;
    use mockito::{Matcher, Server};

    const MODEL: &str = "gemini-1.5-flash-latest";
    const PATH: &str = "/models/gemini-1.5-flash-latest:generateContent";

    fn provider(server: &Server) -> GeminiProvider {
        GeminiProvider::with_base_url("test-key".to_string(), MODEL.to_string(), server.url())
            .unwrap()
    }

    fn request() -> GenerateContentRequest {
        GenerateContentRequest::new("Describe the MVP", &GenerationConfig::scope_default())
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = GeminiProvider::new("  ".to_string(), MODEL.to_string()).unwrap_err();
        assert!(matches!(err, ProviderError::PermissionDenied(_)));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let provider = GeminiProvider::new("super-secret".to_string(), MODEL.to_string()).unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains(MODEL));
        assert!(!debug_str.contains("super-secret"));
    }

    #[tokio::test]
    async fn test_successful_generation() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "generationConfig": {"candidateCount": 1, "topK": 40},
                "contents": [{"role": "user", "parts": [{"text": "Describe the MVP"}]}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r###"{"candidates":[{"content":{"role":"model","parts":[{"text":"## 1. Executive Summary"}]},"finishReason":"STOP"}]}"###,
            )
            .create_async()
            .await;

        let response = provider(&server).generate_content(request()).await.unwrap();
        assert_eq!(response.text(), Some("## 1. Executive Summary".to_string()));
    }

    #[tokio::test]
    async fn test_quota_exhausted() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", PATH)
            .with_status(429)
            .with_body(
                r#"{"error":{"code":429,"message":"Resource has been exhausted (e.g. check quota).","status":"RESOURCE_EXHAUSTED"}}"#,
            )
            .create_async()
            .await;

        let err = provider(&server).generate_content(request()).await.unwrap_err();
        match err {
            ProviderError::QuotaExceeded(msg) => {
                assert_eq!(msg, "Resource has been exhausted (e.g. check quota).")
            }
            other => panic!("Expected QuotaExceeded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_permission_denied() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", PATH)
            .with_status(400)
            .with_body(
                r#"{"error":{"code":400,"message":"API key not valid.","status":"PERMISSION_DENIED"}}"#,
            )
            .create_async()
            .await;

        let err = provider(&server).generate_content(request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::PermissionDenied(ref m) if m == "API key not valid."));
    }

    #[tokio::test]
    async fn test_forbidden_without_body() {
        let mut server = Server::new_async().await;
        let _m = server.mock("POST", PATH).with_status(403).create_async().await;

        let err = provider(&server).generate_content(request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", PATH)
            .with_status(500)
            .with_body(r#"{"error":{"code":500,"message":"Internal error encountered.","status":"INTERNAL"}}"#)
            .create_async()
            .await;

        let err = provider(&server).generate_content(request()).await.unwrap_err();
        match err {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal error encountered.");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = provider(&server).generate_content(request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[test]
    fn test_classify_plain_text_body() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(
            err,
            ProviderError::Api { status: 502, ref message } if message == "upstream down"
        ));
    }
}
