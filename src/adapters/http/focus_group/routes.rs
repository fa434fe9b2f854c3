//! Axum routes for the focus group endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{generate_personas, health, index, run_simulation, FocusGroupAppState};

/// Creates routes for the focus group endpoints.
///
/// Endpoints:
/// - GET  /                   - Input form
/// - POST /generate-personas  - Persona panel as JSON
/// - POST /run-simulation     - Focus group results page
/// - GET  /health             - Health check
pub fn focus_group_routes() -> Router<FocusGroupAppState> {
    Router::new()
        .route("/", get(index))
        .route("/generate-personas", post(generate_personas))
        .route("/run-simulation", post(run_simulation))
        .route("/health", get(health))
}

/// Complete router with state applied.
pub fn focus_group_router(state: FocusGroupAppState) -> Router {
    focus_group_routes().with_state(state)
}
