use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::{AgentError, Result};

const DEFAULT_ENDPOINT: &str = "https://serpapi.com/search.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the SerpAPI Google search endpoint.
///
/// Built once at startup; construction failure is a fatal startup gate,
/// search failures are per-turn errors that surface through the executor.
#[derive(Clone, Debug)]
pub struct SerpApiClient {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl SerpApiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Build a client against a non-default endpoint (used by tests)
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                AgentError::SearchClientInit(format!("Failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Run a Google search and return a short textual digest of the results
    pub async fn search(&self, query: &str) -> Result<String> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|err| AgentError::ToolExecution(format!("Search request failed: {err}")))?;

        let status = response.status();
        let payload: Value = response.json().await.map_err(|err| {
            AgentError::ToolExecution(format!("Failed to parse search response: {err}"))
        })?;

        // SerpAPI reports quota and key problems as an `error` string field,
        // sometimes with a 200 status.
        if let Some(message) = payload.get("error").and_then(|value| value.as_str()) {
            return Err(AgentError::ToolExecution(format!(
                "Search API error: {message}"
            )));
        }

        if !status.is_success() {
            return Err(AgentError::ToolExecution(format!(
                "Search API returned status {status}"
            )));
        }

        Ok(digest_payload(&payload))
    }
}

/// Reduce a raw SerpAPI payload to the answer text the model should see.
///
/// Preference order: answer box answer, answer box snippet, highlighted
/// snippet words, knowledge graph description, first organic result snippet.
fn digest_payload(payload: &Value) -> String {
    let answer_box = payload.get("answer_box");

    if let Some(answer) = answer_box
        .and_then(|b| b.get("answer"))
        .and_then(|v| v.as_str())
    {
        return answer.to_string();
    }

    if let Some(snippet) = answer_box
        .and_then(|b| b.get("snippet"))
        .and_then(|v| v.as_str())
    {
        return snippet.to_string();
    }

    if let Some(words) = answer_box
        .and_then(|b| b.get("snippet_highlighted_words"))
        .and_then(|v| v.as_array())
    {
        let words: Vec<&str> = words.iter().filter_map(|w| w.as_str()).collect();
        if !words.is_empty() {
            return words.join(", ");
        }
    }

    if let Some(description) = payload
        .get("knowledge_graph")
        .and_then(|g| g.get("description"))
        .and_then(|v| v.as_str())
    {
        return description.to_string();
    }

    if let Some(snippet) = payload
        .get("organic_results")
        .and_then(|r| r.as_array())
        .and_then(|results| {
            results
                .iter()
                .find_map(|result| result.get("snippet").and_then(|v| v.as_str()))
        })
    {
        return snippet.to_string();
    }

    "No good search result found".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_digest_prefers_answer_box_answer() {
        let payload = json!({
            "answer_box": {
                "answer": "42",
                "snippet": "longer snippet"
            },
            "organic_results": [{"snippet": "organic"}]
        });
        assert_eq!(digest_payload(&payload), "42");
    }

    #[test]
    fn test_digest_falls_back_to_snippet_then_highlighted() {
        let payload = json!({
            "answer_box": { "snippet": "snippet text" }
        });
        assert_eq!(digest_payload(&payload), "snippet text");

        let payload = json!({
            "answer_box": { "snippet_highlighted_words": ["22", "degrees"] }
        });
        assert_eq!(digest_payload(&payload), "22, degrees");
    }

    #[test]
    fn test_digest_knowledge_graph_and_organic() {
        let payload = json!({
            "knowledge_graph": { "description": "A description" }
        });
        assert_eq!(digest_payload(&payload), "A description");

        let payload = json!({
            "organic_results": [
                {"title": "no snippet here"},
                {"snippet": "first real snippet"}
            ]
        });
        assert_eq!(digest_payload(&payload), "first real snippet");
    }

    #[test]
    fn test_digest_empty_payload() {
        assert_eq!(digest_payload(&json!({})), "No good search result found");
    }
}
