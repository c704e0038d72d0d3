use super::steps::AgentStep;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// System instruction: the model must reach for the search tool for
/// anything current or external.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant. **For any question requiring current, real-time, or highly specific external information (like current time, weather, latest news, recent stock prices, etc.), you MUST use the 'search_internet' tool.** Only if a question can be answered accurately and fully from your internal knowledge, you may answer directly. Always provide the most up-to-date information possible by leveraging your tools.";

/// Per-turn record of the agent's intermediate tool calls and results.
///
/// Created for each user message and discarded once the final answer is
/// produced; nothing carries over between turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scratchpad {
    steps: Vec<AgentStep>,
    system_prompt: Option<String>,
}

impl Scratchpad {
    /// Create a new scratchpad with an optional system prompt
    pub fn new(system_prompt: Option<String>) -> Self {
        Self {
            steps: Vec::new(),
            system_prompt,
        }
    }

    /// Create a scratchpad carrying the default system instruction
    pub fn with_default_system() -> Self {
        Self::new(Some(SYSTEM_PROMPT.to_string()))
    }

    /// Record a step
    pub fn add_step(&mut self, step: AgentStep) {
        info!(target: "mistral_agent::steps", "{}", step.describe());
        self.steps.push(step);
    }

    /// Get all steps
    pub fn steps(&self) -> &[AgentStep] {
        &self.steps
    }

    /// Render the system prompt plus all steps as wire messages
    pub fn as_messages(&self) -> Vec<Value> {
        let mut messages = Vec::new();

        if let Some(system_prompt) = &self.system_prompt {
            messages.push(serde_json::json!({
                "role": "system",
                "content": system_prompt
            }));
        }

        for step in &self.steps {
            messages.push(step.to_message());
        }

        messages
    }

    /// Check if the scratchpad is empty (excluding system prompt)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get number of steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

impl Default for Scratchpad {
    fn default() -> Self {
        Self::with_default_system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratchpad_creation() {
        let scratchpad = Scratchpad::new(Some("System".to_string()));
        assert_eq!(scratchpad.step_count(), 0);
        assert!(scratchpad.is_empty());
    }

    #[test]
    fn test_add_steps() {
        let mut scratchpad = Scratchpad::default();
        scratchpad.add_step(AgentStep::Task {
            content: "Test task".to_string(),
        });
        assert_eq!(scratchpad.step_count(), 1);
        assert!(!scratchpad.is_empty());
    }

    #[test]
    fn test_as_messages() {
        let mut scratchpad = Scratchpad::with_default_system();
        scratchpad.add_step(AgentStep::Task {
            content: "Hello".to_string(),
        });

        let messages = scratchpad.as_messages();
        assert_eq!(messages.len(), 2); // system + task
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
    }

    #[test]
    fn test_system_prompt_mentions_search_tool() {
        // The instruction names the tool the model must use for live data;
        // keep the two in sync.
        assert!(SYSTEM_PROMPT.contains("search_internet"));
    }
}
