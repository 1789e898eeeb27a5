use axum::http::StatusCode;
use serde_json::json;

use crate::db::StoreError;
use crate::submission::handler::HandlerResponse;

#[derive(Debug)]
pub enum SubmissionError {
    /// The body was present but could not be parsed. Carries the parser's
    /// detail, which is logged but never returned to the caller.
    InvalidJson(String),
    MissingFields,
    Storage { label: String, source: StoreError },
}

impl SubmissionError {
    pub fn status(&self) -> StatusCode {
        match self {
            SubmissionError::InvalidJson(_) | SubmissionError::MissingFields => {
                StatusCode::BAD_REQUEST
            }
            SubmissionError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_handler_response(self) -> HandlerResponse {
        let body = json!({ "error": self.to_string() });
        HandlerResponse {
            status_code: self.status().as_u16(),
            body: body.to_string(),
        }
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::InvalidJson(_) => write!(f, "Invalid JSON in request body"),
            SubmissionError::MissingFields => {
                write!(f, "Missing required fields: name, email, message")
            }
            SubmissionError::Storage { label, source } => {
                write!(f, "Failed to save to {label}: {source}")
            }
        }
    }
}

impl std::error::Error for SubmissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmissionError::Storage { source, .. } => Some(source),
            _ => None,
        }
    }
}
