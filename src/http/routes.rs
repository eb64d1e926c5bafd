use axum::{routing::get, Router};

use crate::domain::post::Post;
use crate::domain::task::Task;
use crate::http::handlers;
use crate::AppState;

pub fn health() -> Router<AppState> {
    Router::new().route("/echo", get(handlers::echo))
}

pub fn posts() -> Router<AppState> {
    Router::new().route(
        "/posts",
        get(handlers::list_records::<Post>).post(handlers::create_record::<Post>),
    )
}

pub fn tasks() -> Router<AppState> {
    Router::new().route(
        "/tasks",
        get(handlers::list_records::<Task>).post(handlers::create_record::<Task>),
    )
}
