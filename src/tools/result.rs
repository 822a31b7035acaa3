use serde_json::{Value, json};

/// Outcome of a tool call, reported to the model in-band.
///
/// Serializes to `{"status": "success", "report": ..}` or
/// `{"status": "error", "error_message": ..}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResult {
    Success { report: String },
    Error { message: String },
}

impl ToolResult {
    pub fn success(report: impl Into<String>) -> Self {
        Self::Success { report: report.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn report(&self) -> Option<&str> {
        match self {
            Self::Success { report } => Some(report),
            Self::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message } => Some(message),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Success { report } => json!({ "status": "success", "report": report }),
            Self::Error { message } => json!({ "status": "error", "error_message": message }),
        }
    }
}

impl From<ToolResult> for Value {
    fn from(result: ToolResult) -> Self {
        result.into_value()
    }
}
