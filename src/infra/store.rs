//! Storage interface for record collections.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::record::Record;

/// One named collection of records in the backing store.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Persist a single record. Nothing is written when this fails.
    async fn insert(&self, record: &R) -> Result<()>;

    /// Every stored record, most recently created first.
    async fn list_newest_first(&self) -> Result<Vec<R>>;
}
