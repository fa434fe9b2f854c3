//! Prompt builders for the completion API.
//!
//! Each use case gets a system prompt, a formatted user prompt, and fixed
//! sampling parameters. Keeping these together makes the external contract
//! easy to audit.

use crate::domain::focus_group::{Persona, PersonaResponse};

/// System prompt for persona generation.
pub const PERSONA_SYSTEM_PROMPT: &str =
    "You are a user research expert who creates realistic personas. Always respond with valid JSON only.";

/// System prompt for per-persona reactions.
pub const PARTICIPANT_SYSTEM_PROMPT: &str =
    "You are a realistic focus group participant. Respond in character with authentic, detailed feedback.";

/// System prompt for the strategic insight.
pub const STRATEGIST_SYSTEM_PROMPT: &str =
    "You are a product strategy consultant. Provide actionable, data-driven recommendations.";

/// Sampling parameters for persona generation.
pub const PERSONA_TEMPERATURE: f32 = 0.8;
pub const PERSONA_MAX_TOKENS: u32 = 800;

/// Sampling parameters for per-persona reactions.
pub const REACTION_TEMPERATURE: f32 = 0.9;
pub const REACTION_MAX_TOKENS: u32 = 200;

/// Sampling parameters for the strategic insight.
pub const INSIGHT_TEMPERATURE: f32 = 0.7;
pub const INSIGHT_MAX_TOKENS: u32 = 300;

/// Builds the persona-generation prompt.
///
/// Asks for a JSON array of exactly three persona objects with keys
/// name, age, occupation, traits.
pub fn persona_generation_prompt(product_description: &str, target_market: &str) -> String {
    let target_market = if target_market.trim().is_empty() {
        "General consumers"
    } else {
        target_market
    };

    format!(
        "Based on this product description, generate 3 detailed user personas for a focus group.\n\
         \n\
         Product Description: {product_description}\n\
         Target Market: {target_market}\n\
         \n\
         For each persona, provide:\n\
         1. Name (realistic and diverse)\n\
         2. Age (specific number)\n\
         3. Occupation\n\
         4. Personality & Traits (comma-separated, descriptive)\n\
         \n\
         Format your response as a JSON array with objects containing keys: name, age, occupation, traits\n\
         Make the personas diverse in age, background, and perspective. Each should have a unique viewpoint on this product."
    )
}

/// Builds the in-character reaction prompt for one participant.
pub fn reaction_prompt(persona: &Persona, product_description: &str) -> String {
    format!(
        "You are participating in a focus group for a new product. Respond as this specific persona:\n\
         \n\
         Persona: {name}, Age {age}, {occupation}\n\
         Traits: {traits}\n\
         \n\
         Product: {product_description}\n\
         \n\
         Provide a realistic, detailed response (2-3 sentences) about:\n\
         1. Your initial reaction to this product\n\
         2. Would you use it? Why or why not?\n\
         3. What concerns or questions do you have?\n\
         \n\
         Stay completely in character based on the persona traits.",
        name = persona.name,
        age = persona.age,
        occupation = persona.occupation,
        traits = persona.traits,
    )
}

/// Builds the strategic-insight prompt from collected reactions.
pub fn insight_prompt(
    product_description: &str,
    personas: &[Persona],
    responses: &[PersonaResponse],
) -> String {
    let mut prompt = format!(
        "Based on these focus group responses, provide a strategic recommendation:\n\
         \n\
         Product: {product_description}\n"
    );

    for (i, persona) in personas.iter().enumerate() {
        let text = responses.get(i).map(|r| r.text.as_str()).unwrap_or("");
        prompt.push_str(&format!(
            "\nParticipant {number} ({name} - {traits}): {text}\n",
            number = i + 1,
            name = persona.name,
            traits = persona.traits,
        ));
    }

    prompt.push_str(
        "\nProvide a concise strategic recommendation (3-4 sentences) for the product team. Focus on:\n\
         1. Key themes from the feedback\n\
         2. Suggested improvements\n\
         3. Go-to-market considerations",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_persona() -> Persona {
        Persona::new("Marco Rossi", 38, "Professional Chef", "Perfectionist, values technique")
    }

    #[test]
    fn persona_prompt_includes_product_and_market() {
        let prompt = persona_generation_prompt("A recipe app", "Home cooks aged 25-45");
        assert!(prompt.contains("Product Description: A recipe app"));
        assert!(prompt.contains("Target Market: Home cooks aged 25-45"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn blank_target_market_defaults_to_general_consumers() {
        let prompt = persona_generation_prompt("A recipe app", "  ");
        assert!(prompt.contains("Target Market: General consumers"));
    }

    #[test]
    fn reaction_prompt_embeds_persona_details() {
        let prompt = reaction_prompt(&test_persona(), "A recipe app");
        assert!(prompt.contains("Marco Rossi, Age 38, Professional Chef"));
        assert!(prompt.contains("Traits: Perfectionist, values technique"));
        assert!(prompt.contains("Product: A recipe app"));
    }

    #[test]
    fn insight_prompt_lists_each_participant() {
        let personas = vec![test_persona(), test_persona(), test_persona()];
        let responses: Vec<PersonaResponse> = personas
            .iter()
            .map(|p| PersonaResponse::for_persona(p, "Looks useful."))
            .collect();

        let prompt = insight_prompt("A recipe app", &personas, &responses);
        assert!(prompt.contains("Participant 1 (Marco Rossi"));
        assert!(prompt.contains("Participant 3 (Marco Rossi"));
        assert!(prompt.contains("Looks useful."));
        assert!(prompt.contains("Go-to-market"));
    }

    #[test]
    fn insight_prompt_tolerates_missing_responses() {
        let personas = vec![test_persona()];
        let prompt = insight_prompt("A recipe app", &personas, &[]);
        assert!(prompt.contains("Participant 1"));
    }
}
