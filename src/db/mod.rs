pub mod contact_form;
pub mod memory;

use async_trait::async_trait;

use crate::models::SubmissionRecord;

pub use contact_form::PgSubmissionStore;
pub use memory::MemorySubmissionStore;

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "{err}"),
            StoreError::Backend(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Database(err) => Some(err),
            StoreError::Backend(_) => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Put-item capability of a key-value store, keyed by record id.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Write the record, replacing any item already stored under its id.
    async fn put(&self, record: &SubmissionRecord) -> Result<(), StoreError>;
}
