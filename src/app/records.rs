use std::sync::Arc;

use anyhow::Result;

use crate::domain::record::{utc_now, Record};
use crate::infra::store::RecordStore;

#[derive(Clone)]
pub struct RecordService<R: Record> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Record> RecordService<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }

    /// Stamps the draft with the current UTC time and inserts it.
    pub async fn create(&self, draft: R::Draft) -> Result<R> {
        let record = R::from_draft(draft, utc_now());
        self.store.insert(&record).await?;
        Ok(record)
    }

    pub async fn list(&self) -> Result<Vec<R>> {
        self.store.list_newest_first().await
    }
}
