//! Entity records and their create/update payloads.
//!
//! Each entity is a plain struct with an integer id; the matching draft type is
//! what clients send on create and update. Drafts accept an `id` field for
//! compatibility with clients that echo the record back, but the store always
//! decides the identifier.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FruitDraft {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub secret_name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HeroDraft {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub age: Option<i64>,
    pub secret_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Create/update payload for products (no id field, mirroring the write model).
#[derive(Clone, Debug, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
}
