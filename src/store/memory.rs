//! In-memory store: mutex-guarded rows in insertion order.
//!
//! Shared mutable state behind `Arc<Mutex>`; every operation takes the lock for
//! its full duration, so concurrent requests cannot race id assignment.

use crate::error::AppError;
use crate::model::{Fruit, FruitDraft, Item, ItemDraft};
use crate::store::Store;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Entity types storable in a [`MemoryStore`].
pub trait MemoryRecord: Clone + Send + Sync + 'static {
    type Draft: DeserializeOwned + Send + Sync + 'static;

    const ENTITY: &'static str;
    const DEFAULT_LIMIT: Option<i64> = None;

    fn build(id: i64, draft: Self::Draft) -> Self;
    fn id(&self) -> i64;
}

impl MemoryRecord for Fruit {
    type Draft = FruitDraft;

    const ENTITY: &'static str = "Fruit";
    // The fruits endpoint historically listed three records per page.
    const DEFAULT_LIMIT: Option<i64> = Some(3);

    fn build(id: i64, draft: FruitDraft) -> Self {
        Fruit { id, name: draft.name }
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl MemoryRecord for Item {
    type Draft = ItemDraft;

    const ENTITY: &'static str = "Item";

    fn build(id: i64, draft: ItemDraft) -> Self {
        // Any client-supplied id in the draft is ignored.
        Item {
            id,
            name: draft.name,
            price: draft.price,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }
}

struct Inner<T> {
    rows: Vec<T>,
    next_id: i64,
}

/// Process-lifetime store; records vanish on restart.
pub struct MemoryStore<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        MemoryStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        MemoryStore {
            inner: Arc::new(Mutex::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        // A poisoned lock only means a panic mid-mutation elsewhere; the data
        // is still a valid Vec, so continue with it.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl<T> Store for MemoryStore<T>
where
    T: MemoryRecord + Serialize,
{
    type Record = T;
    type Draft = T::Draft;

    const ENTITY: &'static str = T::ENTITY;
    const DEFAULT_LIMIT: Option<i64> = T::DEFAULT_LIMIT;

    async fn list(&self, skip: i64, limit: Option<i64>) -> Result<Vec<T>, AppError> {
        let inner = self.lock();
        let iter = inner.rows.iter().skip(skip.max(0) as usize);
        Ok(match limit {
            Some(n) => iter.take(n.max(0) as usize).cloned().collect(),
            None => iter.cloned().collect(),
        })
    }

    async fn get(&self, id: i64) -> Result<T, AppError> {
        self.lock()
            .rows
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(T::ENTITY, id))
    }

    async fn insert(&self, draft: T::Draft) -> Result<T, AppError> {
        let mut inner = self.lock();
        // Monotonic counter, never reused. Matches len + 1 until the first
        // delete, after which len + 1 could hand out a live id again.
        let id = inner.next_id;
        inner.next_id += 1;
        let record = T::build(id, draft);
        inner.rows.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, id: i64, draft: T::Draft) -> Result<T, AppError> {
        let mut inner = self.lock();
        let slot = inner
            .rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(T::ENTITY, id))?;
        *slot = T::build(id, draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.lock();
        let pos = inner
            .rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(T::ENTITY, id))?;
        inner.rows.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64) -> ItemDraft {
        ItemDraft {
            id: None,
            name: name.into(),
            price,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store: MemoryStore<Fruit> = MemoryStore::new();
        let apple = store.insert(FruitDraft { name: "apple".into() }).await.unwrap();
        let banana = store.insert(FruitDraft { name: "banana".into() }).await.unwrap();
        assert_eq!(apple.id, 1);
        assert_eq!(banana.id, 2);
    }

    #[tokio::test]
    async fn get_after_insert_returns_same_record() {
        let store: MemoryStore<Item> = MemoryStore::new();
        let created = store.insert(item("pen", 1.5)).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn list_windows_in_insertion_order() {
        let store: MemoryStore<Fruit> = MemoryStore::new();
        for name in ["apple", "banana", "cherry", "date"] {
            store.insert(FruitDraft { name: name.into() }).await.unwrap();
        }
        let page = store.list(0, Some(3)).await.unwrap();
        assert_eq!(
            page.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            ["apple", "banana", "cherry"]
        );
        let rest = store.list(3, Some(3)).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "date");
    }

    #[tokio::test]
    async fn replace_overwrites_every_field() {
        let store: MemoryStore<Item> = MemoryStore::new();
        let pen = store.insert(item("pen", 1.5)).await.unwrap();
        let updated = store.replace(pen.id, item("pencil", 0.5)).await.unwrap();
        assert_eq!(updated.id, pen.id);
        assert_eq!(updated.name, "pencil");
        assert_eq!(updated.price, 0.5);
        assert_eq!(store.get(pen.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn replace_missing_id_is_not_found_and_leaves_store_unchanged() {
        let store: MemoryStore<Item> = MemoryStore::new();
        let pen = store.insert(item("pen", 1.5)).await.unwrap();
        let err = store.replace(99, item("pencil", 0.5)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { id: 99, .. }));
        assert_eq!(store.list(0, None).await.unwrap(), vec![pen]);
    }

    #[tokio::test]
    async fn delete_removes_record_and_missing_id_is_not_found() {
        let store: MemoryStore<Item> = MemoryStore::new();
        let pen = store.insert(item("pen", 1.5)).await.unwrap();
        assert!(matches!(
            store.delete(42).await.unwrap_err(),
            AppError::NotFound { id: 42, .. }
        ));
        store.delete(pen.id).await.unwrap();
        assert!(store.get(pen.id).await.is_err());
    }

    #[tokio::test]
    async fn ids_stay_unique_after_delete() {
        let store: MemoryStore<Item> = MemoryStore::new();
        let a = store.insert(item("a", 1.0)).await.unwrap();
        let b = store.insert(item("b", 2.0)).await.unwrap();
        store.delete(a.id).await.unwrap();
        let c = store.insert(item("c", 3.0)).await.unwrap();
        // len + 1 would have re-issued id 2 here.
        assert_ne!(c.id, b.id);
        assert_eq!(c.id, 3);
    }
}
