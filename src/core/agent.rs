use crate::{
    config::Config,
    error::Result,
    services::mistral_client::MistralClient,
    tools::FunctionFactory,
};
use serde_json::Value;
use std::time::Duration;

/// The agent: a model client plus the registered tools and run limits.
///
/// Clients are constructed once at startup and passed in explicitly; the
/// agent holds them for the process lifetime.
#[derive(Debug)]
pub struct Agent {
    client: MistralClient,
    function_factory: FunctionFactory,
    model: String,
    max_iterations: usize,
    max_tokens: Option<u32>,
    timeout: Duration,
}

impl Agent {
    pub fn new(client: MistralClient, function_factory: FunctionFactory) -> Self {
        Self {
            client,
            function_factory,
            model: crate::config::DEFAULT_MODEL.to_string(),
            max_iterations: 10,
            max_tokens: Some(1000),
            timeout: Duration::from_secs(120),
        }
    }

    /// Build an agent from startup configuration
    pub fn from_config(config: &Config, function_factory: FunctionFactory) -> Result<Self> {
        let mut client = MistralClient::new(config.mistral_api_key.clone())?;
        client.set_base_url(config.base_url.clone());

        Ok(Self::new(client, function_factory)
            .with_model(config.model.clone())
            .with_max_iterations(config.max_iterations)
            .with_max_tokens(config.max_tokens)
            .with_timeout(config.timeout))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client.set_base_url(base_url);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub(crate) fn function_factory(&self) -> &FunctionFactory {
        &self.function_factory
    }

    pub(crate) fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) async fn make_raw_request(&self, request_body: &Value) -> Result<Value> {
        self.client.chat_completion(request_body).await
    }
}
