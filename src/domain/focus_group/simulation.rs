//! Focus group simulation result types.

use serde::{Deserialize, Serialize};

use super::persona::Persona;

/// Maximum number of product-description characters shown in results.
pub const PRODUCT_DISPLAY_LIMIT: usize = 100;

/// One participant's reaction in the rendered results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaResponse {
    pub name: String,
    /// Display line under the name, formatted "{age} • {occupation}".
    pub role: String,
    pub text: String,
}

impl PersonaResponse {
    /// Builds a response row for a participant.
    pub fn for_persona(persona: &Persona, text: impl Into<String>) -> Self {
        Self {
            name: persona.name.clone(),
            role: format!("{} • {}", persona.age, persona.occupation),
            text: text.into(),
        }
    }
}

/// The assembled focus group output embedded in the results page.
///
/// Constructed once per simulation request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusGroupResult {
    /// Product description truncated for display.
    pub product: String,
    pub responses: Vec<PersonaResponse>,
    pub insight: String,
}

impl FocusGroupResult {
    /// Assembles a result, truncating the product description for display.
    pub fn new(
        product_description: &str,
        responses: Vec<PersonaResponse>,
        insight: impl Into<String>,
    ) -> Self {
        Self {
            product: truncate_product(product_description),
            responses,
            insight: insight.into(),
        }
    }

    /// A result carrying a single synthetic System/Error row.
    ///
    /// Composition failures are surfaced this way instead of an HTTP-level
    /// error page.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            product: "Error running simulation".to_string(),
            responses: vec![PersonaResponse {
                name: "System".to_string(),
                role: "Error".to_string(),
                text: format!("An error occurred: {}", message),
            }],
            insight: "Please try again. Make sure all persona fields are filled out correctly."
                .to_string(),
        }
    }
}

/// Truncates a product description to [`PRODUCT_DISPLAY_LIMIT`] characters
/// plus an ellipsis. Descriptions at or under the limit pass through
/// unchanged. Counts characters, not bytes.
pub fn truncate_product(description: &str) -> String {
    if description.chars().count() > PRODUCT_DISPLAY_LIMIT {
        let truncated: String = description.chars().take(PRODUCT_DISPLAY_LIMIT).collect();
        format!("{}...", truncated)
    } else {
        description.to_string()
    }
}
