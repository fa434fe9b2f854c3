//! Response archetypes for the fallback reaction generator.
//!
//! When the completion API is unavailable, each participant's reaction is
//! selected by matching their traits string against an ordered rule list.
//! First match wins: a persona described as both "skeptical" and an
//! "early adopter" always reacts as the Skeptic.

use super::persona::Persona;

/// Reaction archetype derived from a persona's traits string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseArchetype {
    /// Needs evidence before committing ("skeptical", "analytical").
    Skeptic,
    /// Signs up on day one ("early adopter", "enthusiastic").
    EarlyAdopter,
    /// Weighs the price tag ("budget-conscious", "risk-averse").
    BudgetConscious,
    /// Wants it to work out of the box ("time-starved", "busy").
    TimeStarved,
    /// Default when no signal matches.
    Practical,
}

/// Ordered trait-substring rules. Order is significant; do not reorder.
const ARCHETYPE_RULES: &[(ResponseArchetype, &[&str])] = &[
    (ResponseArchetype::Skeptic, &["skeptical", "analytical"]),
    (
        ResponseArchetype::EarlyAdopter,
        &["early adopter", "enthusiastic"],
    ),
    (
        ResponseArchetype::BudgetConscious,
        &["budget-conscious", "risk-averse"],
    ),
    (ResponseArchetype::TimeStarved, &["time-starved", "busy"]),
];

impl ResponseArchetype {
    /// Classifies a traits string. Case-insensitive, first match wins.
    pub fn classify(traits: &str) -> Self {
        let traits = traits.to_lowercase();

        for (archetype, signals) in ARCHETYPE_RULES {
            if signals.iter().any(|s| traits.contains(s)) {
                return *archetype;
            }
        }

        ResponseArchetype::Practical
    }
}

/// Renders the canned reaction for a persona.
///
/// The text references the persona's occupation and first trait, so output
/// is deterministic given identical occupation and traits strings.
pub fn fallback_reaction(persona: &Persona) -> String {
    let occupation = &persona.occupation;
    let trait_ = persona.first_trait().to_lowercase();

    match ResponseArchetype::classify(&persona.traits) {
        ResponseArchetype::Skeptic => format!(
            "As a {occupation} who tends to be {trait_}, I'd need to see some solid data \
             before committing. The concept sounds interesting, but I'm concerned about how \
             well it actually works in practice. I'd probably wait for reviews from trusted \
             sources before trying it."
        ),
        ResponseArchetype::EarlyAdopter => format!(
            "This sounds amazing! Being {trait_} comes with the territory as a {occupation}, \
             and this seems right up my alley. I'd sign up for the free trial immediately and \
             probably become a power user if it delivers on its promises."
        ),
        ResponseArchetype::BudgetConscious => format!(
            "I like the idea, but as a {occupation} I watch every subscription closely. \
             Being {trait_}, I'd need to be really sure it would save me money before \
             committing. The free trial would be essential for me to test if it's worth the \
             investment."
        ),
        ResponseArchetype::TimeStarved => format!(
            "Time is my biggest constraint as a {occupation}, so if this actually saves me \
             time, I'm interested. But being {trait_}, I don't have bandwidth to learn \
             complicated systems. It needs to be intuitive and work right out of the box."
        ),
        ResponseArchetype::Practical => format!(
            "This product addresses a real need I have as a {occupation}. Being {trait_}, \
             I like the concept and would definitely give it a try. My main question is \
             whether the recommendations actually get better over time with more data."
        ),
    }
}
