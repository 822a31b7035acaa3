//! Hands the root agent to the ADK launcher.
//!
//! `adk_cli::Launcher::run` reads the process arguments itself; it does not
//! take a parsed [`crate::cli::Cli`]. Callers validate the same arguments with
//! [`crate::cli::parse`] first so bad input is reported before the launcher
//! starts, and `--help` works without credentials.

use crate::agent::AGENT_NAME;
use crate::error::{BootstrapError, Result};
use adk_agent::LlmAgent;
use adk_cli::Launcher;
use adk_core::{AgentLoader, SingleAgentLoader};
use std::sync::Arc;

pub async fn launch(agent: LlmAgent) -> Result<()> {
    let loader = SingleAgentLoader::new(Arc::new(agent));

    Launcher::new(loader.root_agent())
        .app_name(AGENT_NAME)
        .run()
        .await
        .map_err(BootstrapError::Launch)
}
