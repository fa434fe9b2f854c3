//! HTTP handlers for the focus group endpoints.
//!
//! These handlers connect axum routes to application layer operations.

use std::sync::Arc;

use axum::extract::{Form, Json, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::application::handlers::{
    GeneratePersonasCommand, GeneratePersonasError, GeneratePersonasHandler, RunSimulationCommand,
    RunSimulationHandler,
};
use crate::domain::focus_group::FocusGroupResult;
use crate::ports::AIProvider;

use super::dto::{
    ErrorBody, GeneratePersonasRequest, HealthResponse, PersonaDto, PersonasResponse,
    SimulationForm,
};
use super::render::render_index;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for focus group handlers.
#[derive(Clone)]
pub struct FocusGroupAppState {
    pub generate_personas: Arc<GeneratePersonasHandler>,
    pub run_simulation: Arc<RunSimulationHandler>,
    /// The unified "is the external integration enabled" flag, reported by
    /// /health.
    pub integration_enabled: bool,
}

impl FocusGroupAppState {
    /// Wires both application handlers to the same provider handle.
    ///
    /// Pass `None` when the integration is disabled; every request then
    /// takes the deterministic fallback path.
    pub fn new(provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self {
            integration_enabled: provider.is_some(),
            generate_personas: Arc::new(GeneratePersonasHandler::new(provider.clone())),
            run_simulation: Arc::new(RunSimulationHandler::new(provider)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// API error mapping
// ════════════════════════════════════════════════════════════════════════════════

/// Error responses for the JSON endpoint: `{"error": "..."}` bodies.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl From<GeneratePersonasError> for ApiError {
    fn from(err: GeneratePersonasError) -> Self {
        match err {
            GeneratePersonasError::MissingProductDescription => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Render the input form.
pub async fn index() -> Result<Html<String>, PageError> {
    Ok(Html(render_index(None)?))
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /generate-personas
// ════════════════════════════════════════════════════════════════════════════════

/// POST /generate-personas - Generate a persona panel.
///
/// # Errors
/// - 400 Bad Request: missing/blank product_description
///
/// External API failures never surface here; the handler falls back to the
/// deterministic persona tables.
pub async fn generate_personas(
    State(state): State<FocusGroupAppState>,
    Json(request): Json<GeneratePersonasRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .generate_personas
        .handle(GeneratePersonasCommand {
            product_description: request.product_description,
            target_market: request.target_market,
        })
        .await?;

    let personas: Vec<PersonaDto> = result.personas.into_iter().map(PersonaDto::from).collect();

    Ok((StatusCode::OK, Json(PersonasResponse { personas })))
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /run-simulation
// ════════════════════════════════════════════════════════════════════════════════

/// POST /run-simulation - Run the focus group and render the results page.
///
/// Form validation failures are surfaced as a single System/Error response
/// row on the rendered page, never as an HTTP-level failure.
pub async fn run_simulation(
    State(state): State<FocusGroupAppState>,
    Form(form): Form<SimulationForm>,
) -> Result<Html<String>, PageError> {
    let product_description = form.product_description.clone();

    let result = match form.into_personas() {
        Ok(personas) => {
            state
                .run_simulation
                .handle(RunSimulationCommand {
                    product_description,
                    personas,
                })
                .await
        }
        Err(err) => {
            tracing::warn!(%err, "simulation form failed validation");
            FocusGroupResult::error(err)
        }
    };

    Ok(Html(render_index(Some(&result))?))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /health
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Health check endpoint.
pub async fn health(State(state): State<FocusGroupAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        api_key_configured: state.integration_enabled,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Page error mapping
// ════════════════════════════════════════════════════════════════════════════════

/// Rendering failures on the HTML endpoints.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PageError(#[from] super::render::RenderError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
