//! Generic CRUD handlers, instantiated once per resource store.
//!
//! Each handler maps one HTTP verb to one [`Store`] operation and nothing else;
//! malformed bodies are rejected by the `Json` extractor before a handler runs.

use crate::error::AppError;
use crate::response::Ack;
use crate::store::Store;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

/// List window. A missing `limit` falls back to the store's per-resource default.
#[derive(Debug, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub skip: i64,
    pub limit: Option<i64>,
}

pub async fn list<S: Store>(
    State(store): State<S>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<S::Record>>, AppError> {
    let limit = page.limit.or(S::DEFAULT_LIMIT);
    Ok(Json(store.list(page.skip, limit).await?))
}

pub async fn read<S: Store>(
    State(store): State<S>,
    Path(id): Path<i64>,
) -> Result<Json<S::Record>, AppError> {
    Ok(Json(store.get(id).await?))
}

pub async fn create<S: Store>(
    State(store): State<S>,
    Json(draft): Json<S::Draft>,
) -> Result<(StatusCode, Json<S::Record>), AppError> {
    let record = store.insert(draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update<S: Store>(
    State(store): State<S>,
    Path(id): Path<i64>,
    Json(draft): Json<S::Draft>,
) -> Result<Json<S::Record>, AppError> {
    Ok(Json(store.replace(id, draft).await?))
}

pub async fn delete<S: Store>(
    State(store): State<S>,
    Path(id): Path<i64>,
) -> Result<Json<Ack>, AppError> {
    store.delete(id).await?;
    Ok(Json(Ack::ok()))
}
