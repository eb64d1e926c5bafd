use std::marker::PhantomData;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use mongodb::options::{ClientOptions, FindOptions};
use mongodb::{Client, Collection, Database};
use time::OffsetDateTime;

use crate::config::AppConfig;
use crate::domain::post::Post;
use crate::domain::record::Record;
use crate::domain::task::Task;
use crate::infra::store::RecordStore;

const DATABASE: &str = "app";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const CREATED_AT: &str = "created_at";

/// Connection to the document store. Collections are created by the server
/// on first insert.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(config.mongo_uri()).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(options)?;
        let database = client.database(DATABASE);
        let store = Self { client, database };
        store.ping().await?;
        Ok(store)
    }

    pub async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    pub fn collection<R: DocumentRecord>(&self) -> MongoCollection<R> {
        MongoCollection {
            inner: self.database.collection::<Document>(R::COLLECTION),
            _record: PhantomData,
        }
    }

    /// Releases the driver's connections. Call once, after serving stops.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}

/// Mapping between a record and its stored document.
pub trait DocumentRecord: Record {
    fn to_document(&self) -> Result<Document>;

    fn from_document(document: &Document) -> Result<Self>;
}

impl DocumentRecord for Post {
    fn to_document(&self) -> Result<Document> {
        let created_at = to_bson_datetime(self.created_at)?;
        Ok(doc! {
            "text": self.text.clone(),
            CREATED_AT: created_at,
        })
    }

    fn from_document(document: &Document) -> Result<Self> {
        Ok(Self {
            text: document.get_str("text")?.to_string(),
            created_at: from_bson_datetime(document.get_datetime(CREATED_AT)?)?,
        })
    }
}

impl DocumentRecord for Task {
    fn to_document(&self) -> Result<Document> {
        let created_at = to_bson_datetime(self.created_at)?;
        Ok(doc! {
            "title": self.title.clone(),
            CREATED_AT: created_at,
        })
    }

    fn from_document(document: &Document) -> Result<Self> {
        Ok(Self {
            title: document.get_str("title")?.to_string(),
            created_at: from_bson_datetime(document.get_datetime(CREATED_AT)?)?,
        })
    }
}

fn to_bson_datetime(at: OffsetDateTime) -> Result<BsonDateTime> {
    let millis = i64::try_from(at.unix_timestamp_nanos() / 1_000_000)?;
    Ok(BsonDateTime::from_millis(millis))
}

fn from_bson_datetime(at: &BsonDateTime) -> Result<OffsetDateTime> {
    let nanos = i128::from(at.timestamp_millis()) * 1_000_000;
    Ok(OffsetDateTime::from_unix_timestamp_nanos(nanos)?)
}

pub struct MongoCollection<R> {
    inner: Collection<Document>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for MongoCollection<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R: DocumentRecord> RecordStore<R> for MongoCollection<R> {
    async fn insert(&self, record: &R) -> Result<()> {
        let document = record.to_document()?;
        self.inner.insert_one(document, None).await?;
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<R>> {
        let options = FindOptions::builder().sort(doc! { CREATED_AT: -1 }).build();
        let documents: Vec<Document> = self.inner.find(None, options).await?.try_collect().await?;
        documents.iter().map(R::from_document).collect()
    }
}
