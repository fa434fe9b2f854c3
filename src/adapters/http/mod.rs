//! HTTP adapters - axum routes, handlers, and DTOs.

pub mod focus_group;
