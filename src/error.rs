use adk_core::AdkError;

/// Fatal errors raised while assembling or launching the agent.
///
/// Tool failures never surface here; they are reported in-band through
/// [`crate::ToolResult`].
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to create model: {0}")]
    Model(String),

    #[error("Failed to create agent: {0}")]
    Agent(#[source] AdkError),

    /// Already carries clap's own usage text.
    #[error("{0}")]
    Usage(#[source] clap::Error),

    #[error("Run failed: {0}")]
    Launch(#[source] AdkError),
}

impl BootstrapError {
    /// Whether the launcher usage string should follow the diagnostic.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::Launch(_))
    }
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
