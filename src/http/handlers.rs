use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use bytes::Bytes;

use crate::app::records::RecordService;
use crate::domain::record::{decode_draft, Record};
use crate::http::AppError;

pub async fn echo() -> Json<&'static str> {
    Json("okay")
}

pub async fn create_record<R: Record>(
    State(service): State<RecordService<R>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<R>, AppError> {
    let body = body.map_err(|err| AppError::bad_request(err.body_text()))?;
    let draft: R::Draft =
        decode_draft(&body).map_err(|err| AppError::bad_request(err.to_string()))?;

    let record = service.create(draft).await.map_err(|err| {
        tracing::error!(error = ?err, collection = R::COLLECTION, "failed to insert record");
        AppError::internal(err.to_string())
    })?;

    Ok(Json(record))
}

pub async fn list_records<R: Record>(
    State(service): State<RecordService<R>>,
) -> Result<Json<Vec<R>>, AppError> {
    let records = service.list().await.map_err(|err| {
        tracing::error!(error = ?err, collection = R::COLLECTION, "failed to list records");
        AppError::internal(err.to_string())
    })?;

    Ok(Json(records))
}
