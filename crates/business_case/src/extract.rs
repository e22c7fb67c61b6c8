use serde_json::Value as JsonValue;

use crate::error::ExtractError;
use crate::model::BusinessCaseResponse;
use crate::prompt::{JSON_END_MARKER, JSON_START_MARKER};

/// Trimmed text before the first `[JSON_START]`.
///
/// A reply without the start marker is rejected outright instead of guessing where the
/// narrative ends.
pub fn extract_narrative(raw: &str) -> Result<&str, ExtractError> {
    let start = raw
        .find(JSON_START_MARKER)
        .ok_or(ExtractError::MissingStartMarker)?;
    Ok(raw[..start].trim())
}

/// Parse the JSON strictly between `[JSON_START]` and the first `[JSON_END]`.
///
/// The payload must be an object; its fields are not checked.
pub fn extract_structured_data(raw: &str) -> Result<JsonValue, ExtractError> {
    let payload = json_payload(raw)?;
    let value: JsonValue =
        serde_json::from_str(payload).map_err(|e| ExtractError::InvalidJson(e.to_string()))?;
    if !value.is_object() {
        return Err(ExtractError::NotAnObject(json_type_name(&value)));
    }
    Ok(value)
}

/// Narrative and structured data from one reply. Text after `[JSON_END]` is dropped.
pub fn extract(raw: &str) -> Result<BusinessCaseResponse, ExtractError> {
    let generated_output = extract_narrative(raw)?.to_string();
    let structured_data = extract_structured_data(raw)?;
    Ok(BusinessCaseResponse {
        generated_output,
        structured_data,
    })
}

fn json_payload(raw: &str) -> Result<&str, ExtractError> {
    let start = raw
        .find(JSON_START_MARKER)
        .ok_or(ExtractError::MissingStartMarker)?;
    let end = raw
        .find(JSON_END_MARKER)
        .ok_or(ExtractError::MissingEndMarker)?;
    let body_start = start + JSON_START_MARKER.len();
    if end < body_start {
        return Err(ExtractError::MarkersOutOfOrder);
    }
    Ok(raw[body_start..end].trim())
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
