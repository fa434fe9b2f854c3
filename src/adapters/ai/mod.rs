//! AI provider adapters.

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockError};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
