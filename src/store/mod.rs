//! Resource stores: one trait, an in-memory and a SQLite-backed implementation.

mod memory;
mod sql;

pub use memory::{MemoryRecord, MemoryStore};
pub use sql::{HeroStore, ProductStore};

use crate::error::AppError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// CRUD contract over one entity type, keyed by integer id.
///
/// `Record` is the stored shape (id included); `Draft` is what clients send on
/// create and update. Implementations assign identifiers themselves: memory
/// stores from a monotonic counter, SQL stores from the table's autoincrement
/// primary key.
#[async_trait]
pub trait Store: Clone + Send + Sync + 'static {
    type Record: Serialize + Send;
    type Draft: DeserializeOwned + Send + 'static;

    /// Entity name used in not-found messages.
    const ENTITY: &'static str;

    /// Window applied by `list` when the caller omits `limit`. `None` = unbounded.
    const DEFAULT_LIMIT: Option<i64>;

    /// Records in insertion order (memory) or primary-key order (SQL),
    /// windowed by `skip`/`limit`.
    async fn list(&self, skip: i64, limit: Option<i64>) -> Result<Vec<Self::Record>, AppError>;

    async fn get(&self, id: i64) -> Result<Self::Record, AppError>;

    /// Store the draft under a fresh id and return the stored record.
    async fn insert(&self, draft: Self::Draft) -> Result<Self::Record, AppError>;

    /// Overwrite every field of the record with `id`. No partial updates.
    async fn replace(&self, id: i64, draft: Self::Draft) -> Result<Self::Record, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
