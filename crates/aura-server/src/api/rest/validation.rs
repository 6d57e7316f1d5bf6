//! Request body validation
//!
//! Checks a decoded JSON body against the `IdeaRequest` field constraints and
//! reports every violated field, not just the first.

use super::types::IdeaRequest;
use crate::error::ErrorDetail;
use serde_json::{Map, Value};

pub const IDEA_MIN_CHARS: usize = 10;
pub const IDEA_MAX_CHARS: usize = 1000;
pub const INDUSTRY_MIN_CHARS: usize = 3;
pub const INDUSTRY_MAX_CHARS: usize = 100;

/// Validate a request body, returning one detail per invalid field
pub(crate) fn validate_idea_request(body: &Value) -> Result<IdeaRequest, Vec<ErrorDetail>> {
    let Some(obj) = body.as_object() else {
        return Err(vec![ErrorDetail::new(
            vec!["body".into()],
            "Input should be a valid dictionary or object to extract fields from",
            "model_attributes_type",
        )]);
    };

    let mut errors = Vec::new();
    let idea = text_field(obj, "idea", IDEA_MIN_CHARS, IDEA_MAX_CHARS, &mut errors);
    let industry = text_field(obj, "industry", INDUSTRY_MIN_CHARS, INDUSTRY_MAX_CHARS, &mut errors);

    match (idea, industry) {
        (Some(idea), Some(industry)) => Ok(IdeaRequest { idea, industry }),
        _ => Err(errors),
    }
}

/// Length is counted in characters, not bytes
fn text_field(
    obj: &Map<String, Value>,
    field: &str,
    min: usize,
    max: usize,
    errors: &mut Vec<ErrorDetail>,
) -> Option<String> {
    let loc = vec!["body".into(), field.into()];

    let value = match obj.get(field) {
        None => {
            errors.push(ErrorDetail::new(loc, "Field required", "missing"));
            return None;
        }
        Some(Value::String(s)) => s,
        Some(_) => {
            errors.push(ErrorDetail::new(loc, "Input should be a valid string", "string_type"));
            return None;
        }
    };

    let len = value.chars().count();
    if len < min {
        errors.push(ErrorDetail::new(
            loc,
            format!("String should have at least {} characters", min),
            "string_too_short",
        ));
        None
    } else if len > max {
        errors.push(ErrorDetail::new(
            loc,
            format!("String should have at most {} characters", max),
            "string_too_long",
        ));
        None
    } else {
        Some(value.clone())
    }
}
