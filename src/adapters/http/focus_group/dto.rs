//! HTTP DTOs for the focus group endpoints.
//!
//! These types decouple the HTTP API from domain types. The wire format
//! matches the page's JavaScript: plain snake_case keys.

use serde::{Deserialize, Serialize};

use crate::domain::focus_group::{Persona, AGE_RANGE, DEFAULT_AGE};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// JSON body for POST /generate-personas.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePersonasRequest {
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub target_market: String,
}

/// Form body for POST /run-simulation.
///
/// The page always submits three numbered persona blocks; every field is
/// optional and blank fields get panel defaults downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationForm {
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub name1: String,
    #[serde(default)]
    pub age1: String,
    #[serde(default)]
    pub job1: String,
    #[serde(default)]
    pub traits1: String,
    #[serde(default)]
    pub name2: String,
    #[serde(default)]
    pub age2: String,
    #[serde(default)]
    pub job2: String,
    #[serde(default)]
    pub traits2: String,
    #[serde(default)]
    pub name3: String,
    #[serde(default)]
    pub age3: String,
    #[serde(default)]
    pub job3: String,
    #[serde(default)]
    pub traits3: String,
}

impl SimulationForm {
    /// Converts the form into the submitted persona panel.
    ///
    /// Blank age fields default to [`DEFAULT_AGE`]; a non-blank age that is
    /// not a whole number in range is a validation error.
    pub fn into_personas(self) -> Result<Vec<Persona>, FormValidationError> {
        let personas = vec![
            Persona::new(self.name1, parse_age(&self.age1, "age1")?, self.job1, self.traits1),
            Persona::new(self.name2, parse_age(&self.age2, "age2")?, self.job2, self.traits2),
            Persona::new(self.name3, parse_age(&self.age3, "age3")?, self.job3, self.traits3),
        ];
        Ok(personas)
    }
}

/// Parses one age form field.
fn parse_age(raw: &str, field: &'static str) -> Result<u32, FormValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_AGE);
    }

    match raw.parse::<u32>() {
        Ok(age) if AGE_RANGE.contains(&age) => Ok(age),
        _ => Err(FormValidationError::InvalidAge {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Validation failures for the simulation form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormValidationError {
    #[error("the {field} field must be a whole number between 1 and 120 (got \"{value}\")")]
    InvalidAge { field: &'static str, value: String },
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One persona in the generate-personas response.
#[derive(Debug, Clone, Serialize)]
pub struct PersonaDto {
    pub name: String,
    pub age: u32,
    pub occupation: String,
    pub traits: String,
}

impl From<Persona> for PersonaDto {
    fn from(persona: Persona) -> Self {
        Self {
            name: persona.name,
            age: persona.age,
            occupation: persona.occupation,
            traits: persona.traits,
        }
    }
}

/// Response body for POST /generate-personas.
#[derive(Debug, Clone, Serialize)]
pub struct PersonasResponse {
    pub personas: Vec<PersonaDto>,
}

/// Response body for GET /health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub api_key_configured: bool,
}

/// Error body: `{"error": "..."}` on the JSON endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
