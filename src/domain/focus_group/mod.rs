//! Focus group domain: personas, keyword-rule fallbacks, and simulation
//! results.
//!
//! Everything in this module is pure and deterministic. The fallback
//! generators here produce the exact output served whenever the external
//! completion API is disabled or fails.

mod archetype;
mod category;
mod fallback;
mod persona;
mod simulation;

pub use archetype::{fallback_reaction, ResponseArchetype};
pub use category::ProductCategory;
pub use fallback::{contextual_insight, contextual_personas, insight_for, personas_for};
pub use persona::{
    normalize_panel, validate_generated, Persona, PersonaShapeError, AGE_RANGE, DEFAULT_AGE,
    PANEL_SIZE,
};
pub use simulation::{truncate_product, FocusGroupResult, PersonaResponse, PRODUCT_DISPLAY_LIMIT};
