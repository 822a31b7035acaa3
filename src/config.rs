//! Startup configuration.
//!
//! Read once from the environment:
//! - `GOOGLE_API_KEY` - credential passed verbatim to the Gemini client.
//! - `LLM_MODEL` - model identifier passed verbatim to the Gemini client.
//!
//! A `.env` file in the working directory is loaded first if present.
//! Unset variables read as empty strings; validation happens when the model
//! is created.

use std::fmt;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const MODEL_VAR: &str = "LLM_MODEL";

#[derive(Clone, Default)]
pub struct AgentConfig {
    pub api_key: String,
    pub model: String,
}

impl AgentConfig {
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup(API_KEY_VAR).unwrap_or_default(),
            model: lookup(MODEL_VAR).unwrap_or_default(),
        }
    }
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("AgentConfig")
            .field("api_key", &api_key)
            .field("model", &self.model)
            .finish()
    }
}
