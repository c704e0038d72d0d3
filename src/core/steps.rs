use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single entry in the per-turn scratchpad
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentStep {
    /// The user's question for this turn
    Task { content: String },
    /// A tool invocation requested by the model
    Action {
        tool_name: String,
        tool_call_id: String,
        arguments: Value,
    },
    /// The result of a tool invocation, fed back to the model
    Observation { tool_call_id: String, result: String },
    /// The model's final textual answer
    FinalAnswer { answer: String },
}

impl AgentStep {
    /// Convert step to the chat-completions message format
    pub fn to_message(&self) -> Value {
        match self {
            AgentStep::Task { content } => {
                serde_json::json!({
                    "role": "user",
                    "content": content
                })
            }
            AgentStep::Action {
                tool_name,
                tool_call_id,
                arguments,
            } => {
                serde_json::json!({
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": tool_call_id,
                        "type": "function",
                        "function": {
                            "name": tool_name,
                            "arguments": serde_json::to_string(arguments).unwrap_or_default()
                        }
                    }]
                })
            }
            AgentStep::Observation {
                tool_call_id,
                result,
            } => {
                serde_json::json!({
                    "role": "tool",
                    "tool_call_id": tool_call_id,
                    "content": result
                })
            }
            AgentStep::FinalAnswer { answer } => {
                serde_json::json!({
                    "role": "assistant",
                    "content": answer
                })
            }
        }
    }

    /// Get a human-readable description of the step
    pub fn describe(&self) -> String {
        match self {
            AgentStep::Task { content } => format!("🧭 Task: {}", content),
            AgentStep::Action {
                tool_name,
                arguments,
                ..
            } => {
                format!("🔧 Action: {}({})", tool_name, arguments)
            }
            AgentStep::Observation { result, .. } => format!("👁 Observation: {}", result),
            AgentStep::FinalAnswer { answer } => format!("✅ Final Answer: {}", answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_renders_as_tool_call_message() {
        let step = AgentStep::Action {
            tool_name: "math".to_string(),
            tool_call_id: "call_1".to_string(),
            arguments: json!({"a": 2, "b": 2}),
        };

        let message = step.to_message();
        assert_eq!(message["role"], "assistant");
        assert_eq!(message["tool_calls"][0]["function"]["name"], "math");
        assert_eq!(message["tool_calls"][0]["id"], "call_1");
    }

    #[test]
    fn test_observation_renders_as_tool_message() {
        let step = AgentStep::Observation {
            tool_call_id: "call_1".to_string(),
            result: "{\"sum\":4}".to_string(),
        };

        let message = step.to_message();
        assert_eq!(message["role"], "tool");
        assert_eq!(message["tool_call_id"], "call_1");
        assert_eq!(message["content"], "{\"sum\":4}");
    }
}
