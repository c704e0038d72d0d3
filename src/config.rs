use crate::error::{AgentError, Result};
use std::time::Duration;

/// Environment variable holding the Mistral API credential
pub const MISTRAL_API_KEY_VAR: &str = "MISTRAL_API_KEY";
/// Environment variable holding the SerpAPI credential
pub const SERPAPI_API_KEY_VAR: &str = "SERPAPI_API_KEY";

pub const DEFAULT_MODEL: &str = "mistral-large-latest";
pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";

/// Process-lifetime configuration, read once at startup and never mutated
#[derive(Clone, Debug)]
pub struct Config {
    pub mistral_api_key: String,
    pub serpapi_api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub max_iterations: usize,
    pub max_tokens: Option<u32>,
}

impl Config {
    /// Read both credentials from the environment.
    ///
    /// A variable that is absent or set to an empty string yields
    /// `AgentError::MissingCredential` naming the variable, so startup
    /// can print a diagnostic before any network client is built.
    pub fn from_env() -> Result<Self> {
        let mistral_api_key = required_env(MISTRAL_API_KEY_VAR)?;
        let serpapi_api_key = required_env(SERPAPI_API_KEY_VAR)?;

        Ok(Self {
            mistral_api_key,
            serpapi_api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            max_iterations: 10,
            max_tokens: Some(1000),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AgentError::MissingCredential(name.to_string())),
    }
}
