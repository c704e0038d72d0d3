use reqwest::Client;
use serde_json::{json, Value};

use crate::config::DEFAULT_BASE_URL;
use crate::error::{AgentError, Result};

/// Thin HTTP client for the Mistral chat-completions endpoint.
///
/// One request per call, no retry; turn-level failures are handled by the
/// interactive loop, not here.
#[derive(Clone, Debug)]
pub struct MistralClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl MistralClient {
    pub fn new(api_key: String) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|err| AgentError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        })
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub async fn chat_completion(&self, body: &Value) -> Result<Value> {
        let request_url = build_chat_url(&self.base_url);

        let response = self
            .http
            .post(&request_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| AgentError::Model(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| AgentError::Model(format!("Failed to read response: {err}")))?;

        let response_json: Value = serde_json::from_str(&response_text)
            .map_err(|err| AgentError::Model(format!("Failed to parse JSON: {err}")))?;

        if !status.is_success() {
            let api_message = response_json
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or(response_text.clone());

            return Err(AgentError::Model(format!(
                "HTTP {} error: {}",
                status, api_message
            )));
        }

        if let Some(error) = response_json.get("error") {
            let error_message = error
                .get("message")
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| error.to_string());
            return Err(AgentError::Model(format!("API error: {}", error_message)));
        }

        Ok(response_json)
    }
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

/// Builder for a chat-completions request body
#[derive(Clone, Debug)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Value>,
    tools: Vec<Value>,
    tool_choice: Option<Value>,
    max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            messages,
            tools: Vec::new(),
            tool_choice: None,
            max_tokens: None,
        }
    }

    pub fn with_tools(mut self, tools: Vec<Value>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_tool_choice(mut self, tool_choice: Value) -> Self {
        self.tool_choice = Some(tool_choice);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn into_value(self) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": self.messages,
        });

        if !self.tools.is_empty() {
            body["tools"] = Value::Array(self.tools);
        }

        if let Some(tool_choice) = self.tool_choice {
            body["tool_choice"] = tool_choice;
        }

        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        body
    }
}
