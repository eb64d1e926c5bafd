use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use record_service::domain::record::Record;
use record_service::infra::store::RecordStore;

/// Process-local collection standing in for the document store.
#[derive(Clone)]
pub struct MemoryStore<R> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    async fn insert(&self, record: &R) -> Result<()> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<R>> {
        let mut records = self.records.read().await.clone();
        // Stable sort over the reversed log: ties list the latest insert first.
        records.reverse();
        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(records)
    }
}
