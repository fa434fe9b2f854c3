//! GeneratePersonasHandler - Create a persona panel for a product description.
//!
//! Tries the completion API when the integration is enabled, and falls back
//! to the deterministic keyword-rule personas on any failure: transport
//! errors, malformed JSON, or personas of the wrong shape. The caller never
//! sees an external failure.

use std::sync::Arc;

use crate::domain::focus_group::{self, Persona};
use crate::ports::{AIProvider, CompletionRequest, MessageRole};

use super::super::prompts;

/// Command to generate a persona panel.
#[derive(Debug, Clone)]
pub struct GeneratePersonasCommand {
    pub product_description: String,
    pub target_market: String,
}

/// Result of persona generation.
#[derive(Debug, Clone)]
pub struct GeneratePersonasResult {
    pub personas: Vec<Persona>,
    pub source: PersonaSource,
}

/// Where the personas came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaSource {
    /// Returned by the completion API.
    Generated,
    /// Produced by the deterministic fallback.
    Fallback,
}

/// Error type for persona generation.
///
/// External failures are masked by the fallback; the only error surfaced to
/// the caller is input validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratePersonasError {
    #[error("product_description is required")]
    MissingProductDescription,
}

/// Handler for persona generation.
pub struct GeneratePersonasHandler {
    /// None when the external integration is disabled (fallback-only mode).
    provider: Option<Arc<dyn AIProvider>>,
}

impl GeneratePersonasHandler {
    pub fn new(provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self { provider }
    }

    pub async fn handle(
        &self,
        cmd: GeneratePersonasCommand,
    ) -> Result<GeneratePersonasResult, GeneratePersonasError> {
        if cmd.product_description.trim().is_empty() {
            return Err(GeneratePersonasError::MissingProductDescription);
        }

        if let Some(provider) = &self.provider {
            match self.generate_via_api(provider.as_ref(), &cmd).await {
                Ok(personas) => {
                    return Ok(GeneratePersonasResult {
                        personas,
                        source: PersonaSource::Generated,
                    });
                }
                Err(reason) => {
                    tracing::warn!(%reason, "persona generation fell back to contextual personas");
                }
            }
        }

        Ok(GeneratePersonasResult {
            personas: focus_group::contextual_personas(&cmd.product_description),
            source: PersonaSource::Fallback,
        })
    }

    /// One completion round-trip: prompt, fence-strip, parse, shape-check.
    async fn generate_via_api(
        &self,
        provider: &dyn AIProvider,
        cmd: &GeneratePersonasCommand,
    ) -> Result<Vec<Persona>, String> {
        let prompt =
            prompts::persona_generation_prompt(&cmd.product_description, &cmd.target_market);

        let request = CompletionRequest::new()
            .with_system_prompt(prompts::PERSONA_SYSTEM_PROMPT)
            .with_message(MessageRole::User, prompt)
            .with_temperature(prompts::PERSONA_TEMPERATURE)
            .with_max_tokens(prompts::PERSONA_MAX_TOKENS);

        let response = provider
            .complete(request)
            .await
            .map_err(|e| e.to_string())?;

        let personas: Vec<Persona> = serde_json::from_str(strip_code_fences(&response.content))
            .map_err(|e| format!("invalid persona JSON: {}", e))?;

        focus_group::validate_generated(&personas).map_err(|e| e.to_string())?;

        Ok(personas)
    }
}

/// Strips Markdown code-fence wrappers the model sometimes adds around JSON.
pub fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};

    fn cmd(product: &str) -> GeneratePersonasCommand {
        GeneratePersonasCommand {
            product_description: product.to_string(),
            target_market: String::new(),
        }
    }

    fn valid_personas_json() -> &'static str {
        r#"[
            {"name": "Ana Torres", "age": 31, "occupation": "Nurse", "traits": "Caring, practical"},
            {"name": "Ben Okafor", "age": 44, "occupation": "Accountant", "traits": "Analytical, cautious"},
            {"name": "Chloe Dubois", "age": 23, "occupation": "Barista", "traits": "Enthusiastic, social"}
        ]"#
    }

    mod strip_code_fences {
        use super::*;

        #[test]
        fn strips_json_fence() {
            assert_eq!(strip_code_fences("```json\n[1, 2]\n```"), "[1, 2]");
        }

        #[test]
        fn strips_bare_fence() {
            assert_eq!(strip_code_fences("```\n[1, 2]\n```"), "[1, 2]");
        }

        #[test]
        fn leaves_unfenced_text_alone() {
            assert_eq!(strip_code_fences("[1, 2]"), "[1, 2]");
        }

        #[test]
        fn strips_prefix_only_fence() {
            assert_eq!(strip_code_fences("```json\n[1, 2]"), "[1, 2]");
        }
    }

    #[tokio::test]
    async fn rejects_blank_product_description() {
        let handler = GeneratePersonasHandler::new(None);
        let result = handler.handle(cmd("   ")).await;
        assert_eq!(
            result.unwrap_err(),
            GeneratePersonasError::MissingProductDescription
        );
    }

    #[tokio::test]
    async fn disabled_integration_uses_fallback() {
        let handler = GeneratePersonasHandler::new(None);
        let result = handler.handle(cmd("An AI recipe app")).await.unwrap();

        assert_eq!(result.source, PersonaSource::Fallback);
        assert_eq!(result.personas.len(), 3);
        assert_eq!(result.personas[0].name, "Marco Rossi");
    }

    #[tokio::test]
    async fn api_personas_are_returned_when_well_formed() {
        let provider = Arc::new(MockAIProvider::new().with_response(valid_personas_json()));
        let handler = GeneratePersonasHandler::new(Some(provider.clone()));

        let result = handler.handle(cmd("A productivity tool")).await.unwrap();

        assert_eq!(result.source, PersonaSource::Generated);
        assert_eq!(result.personas[0].name, "Ana Torres");
        assert_eq!(result.personas[2].age, 23);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn fenced_api_output_is_parsed() {
        let fenced = format!("```json\n{}\n```", valid_personas_json());
        let provider = Arc::new(MockAIProvider::new().with_response(fenced));
        let handler = GeneratePersonasHandler::new(Some(provider));

        let result = handler.handle(cmd("A productivity tool")).await.unwrap();
        assert_eq!(result.source, PersonaSource::Generated);
    }

    #[tokio::test]
    async fn api_error_falls_back() {
        let provider = Arc::new(MockAIProvider::new().with_error(MockError::Unavailable));
        let handler = GeneratePersonasHandler::new(Some(provider));

        let result = handler.handle(cmd("An AI recipe app")).await.unwrap();

        assert_eq!(result.source, PersonaSource::Fallback);
        assert_eq!(result.personas[0].name, "Marco Rossi");
    }

    #[tokio::test]
    async fn malformed_json_falls_back() {
        let provider = Arc::new(MockAIProvider::new().with_response("not json at all"));
        let handler = GeneratePersonasHandler::new(Some(provider));

        let result = handler.handle(cmd("a fitness tracker")).await.unwrap();

        assert_eq!(result.source, PersonaSource::Fallback);
        assert_eq!(result.personas[0].name, "Alex Thompson");
    }

    #[tokio::test]
    async fn wrong_persona_count_falls_back() {
        let provider = Arc::new(MockAIProvider::new().with_response(
            r#"[{"name": "Only One", "age": 30, "occupation": "Tester", "traits": "Alone"}]"#,
        ));
        let handler = GeneratePersonasHandler::new(Some(provider));

        let result = handler.handle(cmd("a budgeting app")).await.unwrap();

        assert_eq!(result.source, PersonaSource::Fallback);
        assert_eq!(result.personas[0].name, "Sarah Chen");
    }

    #[tokio::test]
    async fn string_age_falls_back() {
        let provider = Arc::new(MockAIProvider::new().with_response(
            r#"[
                {"name": "A", "age": "thirty", "occupation": "X", "traits": "T"},
                {"name": "B", "age": 30, "occupation": "Y", "traits": "T"},
                {"name": "C", "age": 30, "occupation": "Z", "traits": "T"}
            ]"#,
        ));
        let handler = GeneratePersonasHandler::new(Some(provider));

        let result = handler.handle(cmd("anything else")).await.unwrap();
        assert_eq!(result.source, PersonaSource::Fallback);
    }
}
