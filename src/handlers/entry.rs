//! Shopping entry handlers: list, create, read, update, mark done, delete.

use crate::error::AppError;
use crate::extractors::EntryId;
use crate::model::{CreateEntryRequest, ListFilter, NewShoppingEntry, UpdateEntryRequest};
use crate::response::{created, ok};
use crate::service::EntryService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Undecodable bodies are 400; bodies over the configured cap are 413.
fn decode_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(v)| v).map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::BadRequest(e.body_text())
        }
    })
}

/// GET /entries: all entries ordered by id; `?done=true|false` narrows the list.
pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<ListFilter>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = filter.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let rows = EntryService::list_all(&state.pool, &filter).await?;
    Ok(ok(rows))
}

/// POST /entries and POST /entry/:id: the path id, and any id/created/done in the body, are ignored.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = decode_body(body)?;
    let entry = NewShoppingEntry::from(req);
    let row = EntryService::insert(&state.pool, &entry).await?;
    tracing::info!(id = row.id, name = %row.name, "entry created");
    Ok(created(row))
}

pub async fn read(
    State(state): State<AppState>,
    EntryId(id): EntryId,
) -> Result<impl IntoResponse, AppError> {
    let row = EntryService::get_one(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::entry_not_found(id))?;
    Ok(ok(row))
}

/// PATCH /entry/:id: partial update; `{"done": true}` marks the entry bought.
pub async fn update(
    State(state): State<AppState>,
    EntryId(id): EntryId,
    body: Result<Json<UpdateEntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let patch = decode_body(body)?;
    let row = EntryService::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::entry_not_found(id))?;
    Ok(ok(row))
}

/// POST /entry/:id/done
pub async fn mark_done(
    State(state): State<AppState>,
    EntryId(id): EntryId,
) -> Result<impl IntoResponse, AppError> {
    set_done(&state, id, true).await
}

/// DELETE /entry/:id/done
pub async fn mark_undone(
    State(state): State<AppState>,
    EntryId(id): EntryId,
) -> Result<impl IntoResponse, AppError> {
    set_done(&state, id, false).await
}

async fn set_done(state: &AppState, id: i64, done: bool) -> Result<impl IntoResponse, AppError> {
    let row = EntryService::mark_done(&state.pool, id, done)
        .await?
        .ok_or_else(|| AppError::entry_not_found(id))?;
    Ok(ok(row))
}

/// DELETE /entry/:id: 204 whether or not the row existed.
pub async fn delete(
    State(state): State<AppState>,
    EntryId(id): EntryId,
) -> Result<impl IntoResponse, AppError> {
    let removed = EntryService::delete_by_id(&state.pool, id).await?;
    tracing::debug!(id, removed, "entry delete");
    Ok(StatusCode::NO_CONTENT)
}
