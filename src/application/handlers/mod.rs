//! Application handlers - one use case per module.

mod generate_personas;
mod run_simulation;

pub use generate_personas::{
    strip_code_fences, GeneratePersonasCommand, GeneratePersonasError, GeneratePersonasHandler,
    GeneratePersonasResult, PersonaSource,
};
pub use run_simulation::{RunSimulationCommand, RunSimulationHandler};
