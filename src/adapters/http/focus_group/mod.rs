//! HTTP adapter for the focus group feature.

pub mod dto;
pub mod handlers;
pub mod render;
pub mod routes;

pub use handlers::FocusGroupAppState;
pub use routes::{focus_group_router, focus_group_routes};
