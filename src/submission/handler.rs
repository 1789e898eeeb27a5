use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::SubmissionStore;
use crate::error::SubmissionError;
use crate::models::SubmissionRecord;

use super::fields;
use super::parser;

pub const SUCCESS_MESSAGE: &str = "Form data saved!";

/// One invocation's input: the raw request body, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionEvent {
    #[serde(default)]
    pub body: Option<String>,
}

impl SubmissionEvent {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }
}

/// Status code plus a JSON-encoded body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn saved() -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            body: serde_json::Value::from(SUCCESS_MESSAGE).to_string(),
        }
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

/// Validates contact form submissions and writes them to the store.
pub struct FormSubmissionHandler {
    store: Arc<dyn SubmissionStore>,
    store_label: String,
}

impl FormSubmissionHandler {
    pub fn new(store: Arc<dyn SubmissionStore>, store_label: impl Into<String>) -> Self {
        Self {
            store,
            store_label: store_label.into(),
        }
    }

    pub async fn handle(&self, event: SubmissionEvent) -> HandlerResponse {
        match self.process(event.body.as_deref()).await {
            Ok(record) => {
                tracing::info!(id = %record.id, "Contact form saved");
                HandlerResponse::saved()
            }
            Err(e) => {
                match &e {
                    SubmissionError::Storage { source, .. } => {
                        tracing::error!("Failed to store contact form: {source}");
                    }
                    SubmissionError::InvalidJson(detail) => {
                        tracing::debug!("Rejected submission body: {detail}");
                    }
                    SubmissionError::MissingFields => {
                        tracing::debug!("Rejected submission: missing required fields");
                    }
                }
                e.into_handler_response()
            }
        }
    }

    /// Parse, validate and persist one submission, returning the stored record.
    pub async fn process(&self, body: Option<&str>) -> Result<SubmissionRecord, SubmissionError> {
        let parsed = parser::parse_body(body)?;
        let required = fields::extract_required(&parsed).ok_or(SubmissionError::MissingFields)?;

        let record = SubmissionRecord::new(required, Utc::now());

        self.store
            .put(&record)
            .await
            .map_err(|source| SubmissionError::Storage {
                label: self.store_label.clone(),
                source,
            })?;

        Ok(record)
    }
}
