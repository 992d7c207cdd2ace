//! Shared application state: one store handle per resource.

use crate::model::{Fruit, Item};
use crate::store::{HeroStore, MemoryStore, ProductStore};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub fruits: MemoryStore<Fruit>,
    pub items: MemoryStore<Item>,
    pub heroes: HeroStore,
    pub products: ProductStore,
}

impl AppState {
    /// Fresh in-memory stores; persisted stores share the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        AppState {
            fruits: MemoryStore::new(),
            items: MemoryStore::new(),
            heroes: HeroStore::new(pool.clone()),
            products: ProductStore::new(pool),
        }
    }
}
