//! Custom extractors and middleware
//!
//! Provides a JSON extractor whose rejections use the error envelope.

use crate::error::{ApiError, ErrorDetail, LocItem};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde_json::error::Category;

/// Custom JSON extractor with better error messages
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(reject(
                vec!["body".into()],
                "Missing 'Content-Type: application/json' header",
                "content_type",
            ));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            reject(
                vec!["body".into()],
                format!("Failed to read request body: {}", rejection.body_text()),
                "value_error",
            )
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|err| match err.classify() {
            Category::Syntax | Category::Eof => {
                let position = if err.is_eof() {
                    String::from_utf8_lossy(&bytes).chars().count()
                } else {
                    char_position(&bytes, err.line(), err.column())
                };
                reject(
                    vec!["body".into(), LocItem::Index(position)],
                    format!("JSON decode error: {}", err),
                    "json_invalid",
                )
            }
            Category::Data | Category::Io => reject(
                vec!["body".into()],
                format!("Invalid JSON data: {}", err),
                "value_error",
            ),
        })
    }
}

fn reject(loc: Vec<LocItem>, msg: impl Into<String>, kind: &str) -> ApiError {
    let detail = ErrorDetail::new(loc, msg, kind);
    tracing::warn!("Rejected request body: {}", detail.msg);
    ApiError::Validation(vec![detail])
}

/// `application/json` or any `+json` media type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Zero-based character offset of a 1-based line/column pair
fn char_position(body: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = body
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(body.len());
    String::from_utf8_lossy(&body[..offset]).chars().count()
}
