//! Root agent assembly.

use crate::config::{API_KEY_VAR, AgentConfig, MODEL_VAR};
use crate::error::{BootstrapError, Result};
use crate::tools::{time_tool, weather_tool};
use adk_agent::{LlmAgent, LlmAgentBuilder};
use adk_core::{Llm, Tool};
use adk_model::gemini::GeminiModel;
use std::sync::Arc;

pub const AGENT_NAME: &str = "weather_time_agent";
pub const AGENT_DESCRIPTION: &str = "Agent to answer questions about the time and weather in a city.";
pub const AGENT_INSTRUCTION: &str =
    "You are a helpful agent who can answer user questions about the time and weather in a city.";

/// Creates the Gemini model client.
///
/// Empty credentials are rejected here so a missing `GOOGLE_API_KEY` fails at
/// startup instead of on the first model turn.
pub fn create_model(config: &AgentConfig) -> Result<Arc<dyn Llm>> {
    if config.api_key.is_empty() {
        return Err(BootstrapError::Model(format!("{} is not set", API_KEY_VAR)));
    }
    if config.model.is_empty() {
        return Err(BootstrapError::Model(format!("{} is not set", MODEL_VAR)));
    }

    let model = GeminiModel::new(&config.api_key, &config.model)
        .map_err(|e| BootstrapError::Model(e.to_string()))?;
    tracing::info!(model = %config.model, "created Gemini model");
    Ok(Arc::new(model))
}

/// The agent's tools, weather first.
pub fn tools() -> Vec<Arc<dyn Tool>> {
    vec![Arc::new(weather_tool()), Arc::new(time_tool())]
}

pub fn build_agent(model: Arc<dyn Llm>) -> Result<LlmAgent> {
    let mut builder = LlmAgentBuilder::new(AGENT_NAME)
        .description(AGENT_DESCRIPTION)
        .instruction(AGENT_INSTRUCTION)
        .model(model);

    for tool in tools() {
        tracing::debug!(tool = tool.name(), "registering tool");
        builder = builder.tool(tool);
    }

    let agent = builder.build().map_err(BootstrapError::Agent)?;
    tracing::info!(agent = AGENT_NAME, "agent ready");
    Ok(agent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adk_core::Agent;

    fn config(api_key: &str, model: &str) -> AgentConfig {
        AgentConfig { api_key: api_key.to_string(), model: model.to_string() }
    }

    #[test]
    fn test_tool_names_and_order() {
        let names: Vec<String> = tools().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, vec!["get_weather", "get_current_time"]);
    }

    #[test]
    fn test_missing_api_key_is_model_error() {
        let err = create_model(&config("", "gemini-2.5-flash")).err().unwrap();
        assert!(matches!(err, BootstrapError::Model(_)));
        assert_eq!(err.to_string(), "Failed to create model: GOOGLE_API_KEY is not set");
    }

    #[test]
    fn test_missing_model_is_model_error() {
        let err = create_model(&config("test-key", "")).err().unwrap();
        assert_eq!(err.to_string(), "Failed to create model: LLM_MODEL is not set");
    }

    #[test]
    fn test_build_agent() {
        // Construction does not contact the API.
        let model = create_model(&config("test-key", "gemini-2.5-flash")).unwrap();
        let agent = build_agent(model).unwrap();
        assert_eq!(agent.name(), "weather_time_agent");
        assert_eq!(agent.description(), AGENT_DESCRIPTION);
    }
}
