use super::Tool;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Parameters for the addition tool
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MathParams {
    /// First number to add
    pub a: i64,
    /// Second number to add
    pub b: i64,
}

/// Adds two integers and returns their sum.
///
/// Addition saturates at the i64 bounds instead of wrapping.
#[derive(Debug)]
pub struct MathTool;

impl Default for MathTool {
    fn default() -> Self {
        Self::new()
    }
}

impl MathTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for MathTool {
    fn name(&self) -> &'static str {
        "math"
    }

    fn description(&self) -> &'static str {
        "Add two numbers together and return their sum"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "a": {
                    "type": "integer",
                    "description": "First number to add"
                },
                "b": {
                    "type": "integer",
                    "description": "Second number to add"
                }
            },
            "required": ["a", "b"]
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
        Box::pin(async move {
            let params: MathParams = serde_json::from_value(parameters).map_err(|e| {
                crate::AgentError::InvalidArgument(format!("Invalid parameters: {}", e))
            })?;

            let sum = params.a.saturating_add(params.b);

            Ok(serde_json::json!({ "sum": sum }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_addition_exact() {
        let tool = MathTool::new();

        for (a, b) in [(2i64, 2i64), (0, 0), (-7, 12), (1_000_000, -1)] {
            let result = tool.execute(json!({"a": a, "b": b})).await.unwrap();
            assert_eq!(result["sum"], json!(a + b));
        }
    }

    #[tokio::test]
    async fn test_addition_saturates() {
        let tool = MathTool::new();

        let result = tool
            .execute(json!({"a": i64::MAX, "b": 1}))
            .await
            .unwrap();
        assert_eq!(result["sum"], json!(i64::MAX));

        let result = tool
            .execute(json!({"a": i64::MIN, "b": -1}))
            .await
            .unwrap();
        assert_eq!(result["sum"], json!(i64::MIN));
    }

    #[tokio::test]
    async fn test_invalid_parameters_rejected() {
        let tool = MathTool::new();

        let result = tool.execute(json!({"a": "two", "b": 2})).await;
        assert!(matches!(
            result,
            Err(crate::AgentError::InvalidArgument(_))
        ));

        let result = tool.execute(json!({"a": 2})).await;
        assert!(result.is_err());
    }
}
