//! Crudkit: generic CRUD-over-HTTP resource handlers.
//!
//! One [`Store`] trait with in-memory and SQLite-backed implementations, one
//! generic handler set adapting a store to the CRUD verb set, and literal route
//! registrations composing every resource into a single router.

pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use error::AppError;
pub use migration::{apply_migrations, connect};
pub use response::Ack;
pub use routes::{app, common_routes, fruit_routes, hero_routes, item_routes, product_routes};
pub use state::AppState;
pub use store::{HeroStore, MemoryStore, ProductStore, Store};
