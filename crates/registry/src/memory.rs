use async_trait::async_trait;
use tokio::sync::Mutex;

use fieldboard_core::error::CoreError;
use fieldboard_core::field::{CreateField, FieldRecord};
use fieldboard_core::types::FieldId;

use crate::store::FieldStore;

/// Process-lifetime registry backed by a mutex-guarded `Vec`.
///
/// The lock covers both the id computation and the push, so concurrent
/// appends cannot observe the same length and assign duplicate ids.
/// All state is lost when the process exits; there is no recovery path.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    fields: Mutex<Vec<FieldRecord>>,
}

impl InMemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FieldStore for InMemoryRegistry {
    async fn append(&self, input: CreateField) -> Result<FieldRecord, CoreError> {
        let mut fields = self.fields.lock().await;

        let id = fields.len() as FieldId + 1;
        let record = FieldRecord::from_input(id, input);
        fields.push(record.clone());

        tracing::debug!(field_id = record.id, "Field appended to in-memory registry");

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<FieldRecord>, CoreError> {
        Ok(self.fields.lock().await.clone())
    }

    async fn count(&self) -> usize {
        self.fields.lock().await.len()
    }
}
