use async_trait::async_trait;
use fieldboard_core::error::CoreError;
use fieldboard_core::field::{CreateField, FieldRecord};

/// Storage interface for dashboard field records.
///
/// Implementations own id assignment: `append` must compute the next
/// 1-based id and build the record atomically, so two concurrent appends
/// can never hand out the same id.
#[async_trait]
pub trait FieldStore: Send + Sync {
    /// Append a new record built from `input` and return it.
    ///
    /// The in-memory backend cannot fail; the `Result` is the contract
    /// persistent backends report faults through.
    async fn append(&self, input: CreateField) -> Result<FieldRecord, CoreError>;

    /// Snapshot of all records in insertion order.
    async fn list_all(&self) -> Result<Vec<FieldRecord>, CoreError>;

    /// Number of records currently held.
    async fn count(&self) -> usize;
}
