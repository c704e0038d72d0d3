use thiserror::Error;

/// Main error type for the agent system
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Missing required environment variable: {0}")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search client initialization failed: {0}")]
    SearchClientInit(String),

    #[error("Model API error: {0}")]
    Model(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Maximum iterations exceeded: {0}")]
    MaxIterations(usize),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AgentError>;

impl AgentError {
    /// True for failures that end the whole process rather than a single turn
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AgentError::MissingCredential(_)
                | AgentError::Config(_)
                | AgentError::SearchClientInit(_)
        )
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AgentError::MissingCredential(_) => "MISSING_CREDENTIAL",
            AgentError::Config(_) => "CONFIG_ERROR",
            AgentError::SearchClientInit(_) => "SEARCH_CLIENT_INIT_ERROR",
            AgentError::Model(_) => "MODEL_API_ERROR",
            AgentError::Serialization(_) => "SERIALIZATION_ERROR",
            AgentError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AgentError::ToolExecution(_) => "TOOL_EXECUTION_ERROR",
            AgentError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            AgentError::Timeout(_) => "TIMEOUT_ERROR",
            AgentError::MaxIterations(_) => "MAX_ITERATIONS_EXCEEDED",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "fatal": self.is_fatal()
            }
        })
    }
}
