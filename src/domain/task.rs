use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::record::{string_or_null, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default, deserialize_with = "string_or_null")]
    pub title: String,
}

impl Record for Task {
    type Draft = CreateTaskRequest;

    const COLLECTION: &'static str = "tasks";

    fn from_draft(draft: CreateTaskRequest, created_at: OffsetDateTime) -> Self {
        Self {
            title: draft.title,
            created_at,
        }
    }

    fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}
