use serde_json::{Map, Value};

use crate::error::SubmissionError;

/// Parse the raw request body. An absent or empty body parses to an empty
/// object; anything else must be a JSON document.
pub fn parse_body(body: Option<&str>) -> Result<Value, SubmissionError> {
    match body {
        None | Some("") => Ok(Value::Object(Map::new())),
        Some(raw) => {
            serde_json::from_str(raw).map_err(|e| SubmissionError::InvalidJson(e.to_string()))
        }
    }
}

/// Decode body bytes as UTF-8 text. An empty body is treated as absent.
pub fn body_text(bytes: &[u8]) -> Result<Option<String>, SubmissionError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    std::str::from_utf8(bytes)
        .map(|s| Some(s.to_string()))
        .map_err(|e| SubmissionError::InvalidJson(format!("Invalid UTF-8: {e}")))
}
