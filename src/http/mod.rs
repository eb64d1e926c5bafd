use axum::Router;
use tower_http::cors::CorsLayer;

use crate::AppState;

mod error;
mod handlers;
mod routes;

pub use error::AppError;

/// All routes, open to cross-origin callers from any origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health())
        .merge(routes::posts())
        .merge(routes::tasks())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
