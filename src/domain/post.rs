use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::record::{string_or_null, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "string_or_null")]
    pub text: String,
}

impl Record for Post {
    type Draft = CreatePostRequest;

    const COLLECTION: &'static str = "posts";

    fn from_draft(draft: CreatePostRequest, created_at: OffsetDateTime) -> Self {
        Self {
            text: draft.text,
            created_at,
        }
    }

    fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}
