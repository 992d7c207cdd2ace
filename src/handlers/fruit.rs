//! Fruit create takes the name as a path segment instead of a JSON body.

use crate::error::AppError;
use crate::model::{Fruit, FruitDraft};
use crate::store::{MemoryStore, Store};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn create_by_name(
    State(store): State<MemoryStore<Fruit>>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<Fruit>), AppError> {
    let fruit = store.insert(FruitDraft { name }).await?;
    Ok((StatusCode::CREATED, Json(fruit)))
}
