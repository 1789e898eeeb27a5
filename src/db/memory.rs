use async_trait::async_trait;
use dashmap::DashMap;

use crate::models::SubmissionRecord;

use super::{StoreError, SubmissionStore};

/// Process-local store. Records are lost when the process exits.
pub struct MemorySubmissionStore {
    items: DashMap<String, SubmissionRecord>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<SubmissionRecord> {
        self.items.get(id).map(|entry| entry.value().clone())
    }

    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.items.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MemorySubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn put(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        self.items.insert(record.id.clone(), record.clone());
        Ok(())
    }
}
