//! Persona records and panel normalization.

use serde::{Deserialize, Serialize};

/// Default age substituted for missing persona slots or blank age fields.
pub const DEFAULT_AGE: u32 = 30;

/// Inclusive age range accepted from externally-sourced persona JSON.
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 1..=120;

/// Number of participants in every focus group.
pub const PANEL_SIZE: usize = 3;

/// A synthetic user profile used to role-play product feedback.
///
/// Ephemeral: personas exist only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub age: u32,
    pub occupation: String,
    /// Comma-separated descriptive string, e.g. "Analytical, data-driven".
    pub traits: String,
}

impl Persona {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        occupation: impl Into<String>,
        traits: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            occupation: occupation.into(),
            traits: traits.into(),
        }
    }

    /// The stand-in participant for an empty panel slot (1-based index).
    pub fn placeholder(index: usize) -> Self {
        Self::new(format!("Person {}", index), DEFAULT_AGE, "Professional", "Average user")
    }

    /// First comma-separated entry of the traits string, trimmed.
    ///
    /// Falls back to "practical" when the traits string is blank so that
    /// templates always have something to interpolate.
    pub fn first_trait(&self) -> &str {
        match self.traits.split(',').next().map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => "practical",
        }
    }

    /// Replaces blank fields with the panel defaults (1-based index).
    fn with_defaults(mut self, index: usize) -> Self {
        if self.name.trim().is_empty() {
            self.name = format!("Person {}", index);
        }
        if self.age == 0 {
            self.age = DEFAULT_AGE;
        }
        if self.occupation.trim().is_empty() {
            self.occupation = "Professional".to_string();
        }
        if self.traits.trim().is_empty() {
            self.traits = "Average user".to_string();
        }
        self
    }
}

/// Normalizes an arbitrary persona list into a full panel of exactly
/// [`PANEL_SIZE`] participants.
///
/// Missing slots are filled with placeholders, blank fields get defaults,
/// and extra personas beyond the panel size are ignored.
pub fn normalize_panel(personas: Vec<Persona>) -> Vec<Persona> {
    let mut panel: Vec<Persona> = personas
        .into_iter()
        .take(PANEL_SIZE)
        .enumerate()
        .map(|(i, p)| p.with_defaults(i + 1))
        .collect();

    for i in panel.len()..PANEL_SIZE {
        panel.push(Persona::placeholder(i + 1));
    }

    panel
}

/// Validates the shape of externally-sourced personas.
///
/// The completion API is asked for a JSON array of exactly three persona
/// objects; anything else is treated the same as a transport failure and
/// triggers the deterministic fallback.
pub fn validate_generated(personas: &[Persona]) -> Result<(), PersonaShapeError> {
    if personas.len() != PANEL_SIZE {
        return Err(PersonaShapeError::WrongCount(personas.len()));
    }
    for persona in personas {
        if persona.name.trim().is_empty()
            || persona.occupation.trim().is_empty()
            || persona.traits.trim().is_empty()
        {
            return Err(PersonaShapeError::BlankField);
        }
        if !AGE_RANGE.contains(&persona.age) {
            return Err(PersonaShapeError::AgeOutOfRange(persona.age));
        }
    }
    Ok(())
}

/// Shape violations in personas returned by the completion API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonaShapeError {
    #[error("expected 3 personas, got {0}")]
    WrongCount(usize),

    #[error("persona has a blank name, occupation, or traits field")]
    BlankField,

    #[error("persona age {0} is out of range")]
    AgeOutOfRange(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_persona() -> Persona {
        Persona::new("Marcus Chen", 32, "Software Engineer", "Analytical, data-driven")
    }

    mod first_trait {
        use super::*;

        #[test]
        fn returns_first_comma_entry_trimmed() {
            let p = Persona::new("A", 30, "B", "Budget-conscious,  needs simplicity");
            assert_eq!(p.first_trait(), "Budget-conscious");
        }

        #[test]
        fn blank_traits_fall_back_to_practical() {
            let p = Persona::new("A", 30, "B", "");
            assert_eq!(p.first_trait(), "practical");

            let p = Persona::new("A", 30, "B", "  ,also blank first entry");
            assert_eq!(p.first_trait(), "practical");
        }
    }

    mod normalize_panel {
        use super::*;

        #[test]
        fn empty_input_yields_three_placeholders() {
            let panel = normalize_panel(Vec::new());
            assert_eq!(panel.len(), 3);
            assert_eq!(panel[0].name, "Person 1");
            assert_eq!(panel[2].name, "Person 3");
            assert_eq!(panel[1].age, DEFAULT_AGE);
            assert_eq!(panel[1].occupation, "Professional");
            assert_eq!(panel[1].traits, "Average user");
        }

        #[test]
        fn short_input_is_padded() {
            let panel = normalize_panel(vec![full_persona()]);
            assert_eq!(panel.len(), 3);
            assert_eq!(panel[0].name, "Marcus Chen");
            assert_eq!(panel[1].name, "Person 2");
        }

        #[test]
        fn extra_personas_are_ignored() {
            let panel = normalize_panel(vec![
                full_persona(),
                full_persona(),
                full_persona(),
                Persona::new("Fourth Wheel", 40, "Extra", "Unused"),
            ]);
            assert_eq!(panel.len(), 3);
            assert!(panel.iter().all(|p| p.name == "Marcus Chen"));
        }

        #[test]
        fn blank_fields_get_defaults() {
            let panel = normalize_panel(vec![Persona::new("  ", 0, "", "")]);
            assert_eq!(panel[0].name, "Person 1");
            assert_eq!(panel[0].age, DEFAULT_AGE);
            assert_eq!(panel[0].occupation, "Professional");
            assert_eq!(panel[0].traits, "Average user");
        }

        #[test]
        fn filled_fields_are_preserved() {
            let panel = normalize_panel(vec![full_persona()]);
            assert_eq!(panel[0], full_persona());
        }
    }

    mod validate_generated {
        use super::*;

        #[test]
        fn accepts_three_well_formed_personas() {
            let personas = vec![full_persona(), full_persona(), full_persona()];
            assert!(validate_generated(&personas).is_ok());
        }

        #[test]
        fn rejects_wrong_count() {
            let personas = vec![full_persona(), full_persona()];
            assert_eq!(
                validate_generated(&personas),
                Err(PersonaShapeError::WrongCount(2))
            );
        }

        #[test]
        fn rejects_blank_fields() {
            let mut personas = vec![full_persona(), full_persona(), full_persona()];
            personas[1].occupation = "   ".to_string();
            assert_eq!(
                validate_generated(&personas),
                Err(PersonaShapeError::BlankField)
            );
        }

        #[test]
        fn rejects_out_of_range_age() {
            let mut personas = vec![full_persona(), full_persona(), full_persona()];
            personas[2].age = 0;
            assert_eq!(
                validate_generated(&personas),
                Err(PersonaShapeError::AgeOutOfRange(0))
            );

            personas[2].age = 200;
            assert_eq!(
                validate_generated(&personas),
                Err(PersonaShapeError::AgeOutOfRange(200))
            );
        }
    }
}
