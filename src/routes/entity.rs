//! Resource routes: fixed method+path registrations per entity.
//!
//! Prefixes are disjoint (`/fruits`, `/fruit`, `/items`, `/heroes`,
//! `/products`), so registration order does not matter. Trailing slashes match
//! the historical surface exactly.

use crate::handlers::{fruit, resource};
use crate::model::{Fruit, Item};
use crate::store::{HeroStore, MemoryStore, ProductStore};
use axum::{
    routing::{get, put},
    Router,
};

pub fn fruit_routes(store: MemoryStore<Fruit>) -> Router {
    Router::new()
        .route("/fruits/", get(resource::list::<MemoryStore<Fruit>>))
        // One template serves both verbs: the segment is an id for GET and a
        // name for POST.
        .route(
            "/fruit/:id",
            get(resource::read::<MemoryStore<Fruit>>).post(fruit::create_by_name),
        )
        .with_state(store)
}

pub fn item_routes(store: MemoryStore<Item>) -> Router {
    Router::new()
        .route(
            "/items/",
            get(resource::list::<MemoryStore<Item>>).post(resource::create::<MemoryStore<Item>>),
        )
        .route("/items/:item_id", put(resource::update::<MemoryStore<Item>>))
        .with_state(store)
}

pub fn hero_routes(store: HeroStore) -> Router {
    Router::new()
        .route(
            "/heroes/",
            get(resource::list::<HeroStore>).post(resource::create::<HeroStore>),
        )
        .route(
            "/heroes/:hero_id",
            get(resource::read::<HeroStore>)
                .put(resource::update::<HeroStore>)
                .delete(resource::delete::<HeroStore>),
        )
        .with_state(store)
}

pub fn product_routes(store: ProductStore) -> Router {
    Router::new()
        .route(
            "/products",
            get(resource::list::<ProductStore>).post(resource::create::<ProductStore>),
        )
        .route(
            "/products/:product_id",
            get(resource::read::<ProductStore>)
                .put(resource::update::<ProductStore>)
                .delete(resource::delete::<ProductStore>),
        )
        .with_state(store)
}
