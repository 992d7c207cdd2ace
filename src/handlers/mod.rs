//! HTTP handlers: generic CRUD plus the fruit path-parameter create.

pub mod fruit;
pub mod resource;
