use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::submission::fields::RequiredFields;

/// A contact form entry as written to the `ContactForm` collection.
///
/// The field values are kept exactly as they arrived in the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub name: Value,
    pub email: Value,
    pub message: Value,
}

impl SubmissionRecord {
    pub fn new(fields: RequiredFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id: record_id(created_at),
            name: fields.name,
            email: fields.email,
            message: fields.message,
        }
    }
}

/// Epoch milliseconds in decimal. Two records built in the same millisecond
/// share an id.
pub fn record_id(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}
