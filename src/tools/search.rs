use super::Tool;
use crate::services::serpapi::SerpApiClient;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Parameters accepted by the internet search tool
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchParams {
    /// The search query
    pub query: String,
}

/// Searches the internet through SerpAPI and returns the result digest.
///
/// Search failures propagate unchanged to the executor, which surfaces
/// them as a turn-level failure.
#[derive(Debug, Clone)]
pub struct SearchInternetTool {
    client: SerpApiClient,
}

impl SearchInternetTool {
    /// Create the tool around an already-initialized search client
    pub fn new(client: SerpApiClient) -> Self {
        Self { client }
    }
}

impl Tool for SearchInternetTool {
    fn name(&self) -> &'static str {
        "search_internet"
    }

    fn description(&self) -> &'static str {
        "Search the internet for latest information"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    fn execute(
        &self,
        parameters: serde_json::Value,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, crate::AgentError>>
                + Send
                + '_,
        >,
    > {
        let client = self.client.clone();

        Box::pin(async move {
            let params: SearchParams = serde_json::from_value(parameters).map_err(|err| {
                crate::AgentError::InvalidArgument(format!("Invalid parameters: {}", err))
            })?;

            let results = client.search(&params.query).await?;

            Ok(serde_json::json!({ "results": results }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_rejects_malformed_parameters() {
        let client = SerpApiClient::new("test-key").unwrap();
        let tool = SearchInternetTool::new(client);

        let result = tool.execute(json!({"q": "wrong field"})).await;
        assert!(matches!(
            result,
            Err(crate::AgentError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_schema_names_query() {
        let client = SerpApiClient::new("test-key").unwrap();
        let tool = SearchInternetTool::new(client);

        let schema = tool.parameters_schema();
        assert!(schema["properties"]["query"].is_object());
        assert_eq!(schema["required"][0], "query");
    }
}
