//! RunSimulationHandler - Produce the focus group discussion for a panel.
//!
//! When the integration is enabled, makes one completion call per
//! participant (sequentially) and a final call for the strategic insight.
//! Any failure anywhere discards partial output and degrades the whole
//! request to the deterministic fallback, so the rendered page is always
//! complete.

use std::sync::Arc;

use crate::domain::focus_group::{
    self, fallback_reaction, FocusGroupResult, Persona, PersonaResponse,
};
use crate::ports::{AIProvider, CompletionRequest, MessageRole};

use super::super::prompts;

/// Command to run a focus group simulation.
#[derive(Debug, Clone)]
pub struct RunSimulationCommand {
    pub product_description: String,
    /// Panel as submitted; normalized to exactly three participants.
    pub personas: Vec<Persona>,
}

/// Handler for focus group simulations.
pub struct RunSimulationHandler {
    /// None when the external integration is disabled (fallback-only mode).
    provider: Option<Arc<dyn AIProvider>>,
}

impl RunSimulationHandler {
    pub fn new(provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self { provider }
    }

    /// Runs the simulation. Infallible by design: external failures are
    /// masked by the fallback, and input validation happens upstream.
    pub async fn handle(&self, cmd: RunSimulationCommand) -> FocusGroupResult {
        let personas = focus_group::normalize_panel(cmd.personas);

        if let Some(provider) = &self.provider {
            match self
                .simulate_via_api(provider.as_ref(), &cmd.product_description, &personas)
                .await
            {
                Ok((responses, insight)) => {
                    return FocusGroupResult::new(&cmd.product_description, responses, insight);
                }
                Err(reason) => {
                    tracing::warn!(%reason, "simulation fell back to canned responses");
                }
            }
        }

        let (responses, insight) = fallback_discussion(&cmd.product_description, &personas);
        FocusGroupResult::new(&cmd.product_description, responses, insight)
    }

    /// Sequential completion calls: one per participant, then the insight.
    async fn simulate_via_api(
        &self,
        provider: &dyn AIProvider,
        product_description: &str,
        personas: &[Persona],
    ) -> Result<(Vec<PersonaResponse>, String), String> {
        let mut responses = Vec::with_capacity(personas.len());

        for persona in personas {
            let request = CompletionRequest::new()
                .with_system_prompt(prompts::PARTICIPANT_SYSTEM_PROMPT)
                .with_message(
                    MessageRole::User,
                    prompts::reaction_prompt(persona, product_description),
                )
                .with_temperature(prompts::REACTION_TEMPERATURE)
                .with_max_tokens(prompts::REACTION_MAX_TOKENS);

            let completion = provider
                .complete(request)
                .await
                .map_err(|e| e.to_string())?;

            responses.push(PersonaResponse::for_persona(
                persona,
                completion.content.trim(),
            ));
        }

        let request = CompletionRequest::new()
            .with_system_prompt(prompts::STRATEGIST_SYSTEM_PROMPT)
            .with_message(
                MessageRole::User,
                prompts::insight_prompt(product_description, personas, &responses),
            )
            .with_temperature(prompts::INSIGHT_TEMPERATURE)
            .with_max_tokens(prompts::INSIGHT_MAX_TOKENS);

        let completion = provider
            .complete(request)
            .await
            .map_err(|e| e.to_string())?;

        Ok((responses, completion.content.trim().to_string()))
    }
}

/// The fully deterministic discussion: canned reactions keyed on persona
/// traits plus the category-keyed insight.
fn fallback_discussion(
    product_description: &str,
    personas: &[Persona],
) -> (Vec<PersonaResponse>, String) {
    let responses = personas
        .iter()
        .map(|p| PersonaResponse::for_persona(p, fallback_reaction(p)))
        .collect();

    (responses, focus_group::contextual_insight(product_description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};

    fn panel() -> Vec<Persona> {
        vec![
            Persona::new("Marco Rossi", 38, "Professional Chef", "Skeptical of shortcuts"),
            Persona::new("Jennifer Walsh", 34, "Working Mother", "Time-starved, busy"),
            Persona::new("David Chen", 28, "Food Blogger", "Trend-focused"),
        ]
    }

    fn cmd(product: &str, personas: Vec<Persona>) -> RunSimulationCommand {
        RunSimulationCommand {
            product_description: product.to_string(),
            personas,
        }
    }

    #[tokio::test]
    async fn fallback_mode_produces_three_responses_and_insight() {
        let handler = RunSimulationHandler::new(None);
        let result = handler.handle(cmd("An AI recipe app", panel())).await;

        assert_eq!(result.responses.len(), 3);
        assert!(!result.insight.is_empty());
        assert_eq!(result.responses[0].name, "Marco Rossi");
        assert_eq!(result.responses[0].role, "38 • Professional Chef");
        // Skeptical traits select the skeptic reaction.
        assert!(result.responses[0].text.contains("solid data"));
    }

    #[tokio::test]
    async fn empty_panel_is_padded_with_placeholders() {
        let handler = RunSimulationHandler::new(None);
        let result = handler.handle(cmd("Some product", Vec::new())).await;

        assert_eq!(result.responses.len(), 3);
        assert_eq!(result.responses[0].name, "Person 1");
        assert_eq!(result.responses[2].role, "30 • Professional");
    }

    #[tokio::test]
    async fn api_mode_makes_four_sequential_calls() {
        let provider = Arc::new(
            MockAIProvider::new()
                .with_response("Reaction one.")
                .with_response("Reaction two.")
                .with_response("Reaction three.")
                .with_response("Ship it with a free trial."),
        );
        let handler = RunSimulationHandler::new(Some(provider.clone()));

        let result = handler.handle(cmd("An AI recipe app", panel())).await;

        assert_eq!(provider.call_count(), 4);
        assert_eq!(result.responses[0].text, "Reaction one.");
        assert_eq!(result.responses[2].text, "Reaction three.");
        assert_eq!(result.insight, "Ship it with a free trial.");

        // The final call carries the collected reactions.
        let calls = provider.get_calls();
        assert!(calls[3].messages[0].content.contains("Reaction two."));
    }

    #[tokio::test]
    async fn mid_panel_failure_degrades_everything_to_fallback() {
        let provider = Arc::new(
            MockAIProvider::new()
                .with_response("Reaction one.")
                .with_error(MockError::Network),
        );
        let handler = RunSimulationHandler::new(Some(provider.clone()));

        let result = handler.handle(cmd("An AI recipe app", panel())).await;

        // Partial API output is discarded entirely.
        assert_eq!(provider.call_count(), 2);
        assert_eq!(result.responses.len(), 3);
        assert!(result.responses[0].text.contains("solid data"));
        assert!(result.insight.contains("time-saving"));
    }

    #[tokio::test]
    async fn insight_failure_also_degrades_to_fallback() {
        let provider = Arc::new(
            MockAIProvider::new()
                .with_response("One.")
                .with_response("Two.")
                .with_response("Three.")
                .with_error(MockError::RateLimited),
        );
        let handler = RunSimulationHandler::new(Some(provider));

        let result = handler.handle(cmd("a note-taking tool", panel())).await;

        assert!(result.insight.contains("free trial"));
        assert_ne!(result.responses[0].text, "One.");
    }

    #[tokio::test]
    async fn product_is_truncated_in_result() {
        let handler = RunSimulationHandler::new(None);
        let long = "p".repeat(150);
        let result = handler.handle(cmd(&long, panel())).await;

        assert_eq!(result.product.chars().count(), 103);
        assert!(result.product.ends_with("..."));
    }
}
