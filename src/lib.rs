pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod infra;

use std::sync::Arc;

use axum::extract::FromRef;

use crate::app::records::RecordService;
use crate::domain::post::Post;
use crate::domain::task::Task;
use crate::infra::store::RecordStore;

/// Collection handles shared by every request. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub posts: RecordService<Post>,
    pub tasks: RecordService<Task>,
}

impl AppState {
    pub fn new(posts: Arc<dyn RecordStore<Post>>, tasks: Arc<dyn RecordStore<Task>>) -> Self {
        Self {
            posts: RecordService::new(posts),
            tasks: RecordService::new(tasks),
        }
    }
}

impl FromRef<AppState> for RecordService<Post> {
    fn from_ref(state: &AppState) -> Self {
        state.posts.clone()
    }
}

impl FromRef<AppState> for RecordService<Task> {
    fn from_ref(state: &AppState) -> Self {
        state.tasks.clone()
    }
}
