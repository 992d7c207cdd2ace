//! Route construction and composition.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::{fruit_routes, hero_routes, item_routes, product_routes};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The full application: common routes plus every resource, one address space.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(fruit_routes(state.fruits))
        .merge(item_routes(state.items))
        .merge(hero_routes(state.heroes))
        .merge(product_routes(state.products))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}
