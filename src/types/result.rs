use crate::core::steps::AgentStep;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of a single conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Final answer text from the model
    pub output: String,
    /// All scratchpad steps recorded during the turn
    pub steps: Vec<AgentStep>,
    /// Total tokens used across the turn's model calls (if reported)
    pub tokens: Option<TokenUsage>,
    /// Total execution duration
    pub duration: Duration,
    /// Number of model round trips used
    pub iterations: usize,
}

/// Token usage information from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl RunResult {
    pub fn new(
        output: String,
        steps: Vec<AgentStep>,
        tokens: Option<TokenUsage>,
        duration: Duration,
        iterations: usize,
    ) -> Self {
        Self {
            output,
            steps,
            tokens,
            duration,
            iterations,
        }
    }

    /// Generate a human-readable replay of the turn
    pub fn replay(&self) -> String {
        let mut lines = Vec::new();

        lines.push("=== Agent Execution Trace ===".to_string());
        lines.push(format!("Duration: {:.2}s", self.duration.as_secs_f64()));
        lines.push(format!("Iterations: {}", self.iterations));

        if let Some(tokens) = &self.tokens {
            lines.push(format!(
                "Tokens: {} prompt + {} completion = {} total",
                tokens.prompt_tokens, tokens.completion_tokens, tokens.total_tokens
            ));
        }

        lines.push(String::new());
        lines.push("--- Steps ---".to_string());

        for (idx, step) in self.steps.iter().enumerate() {
            lines.push(format!("{}. {}", idx + 1, step.describe()));
        }

        lines.push(String::new());
        lines.push("--- Final Output ---".to_string());
        lines.push(self.output.clone());

        lines.join("\n")
    }

    /// Get count of actions (tool calls) executed
    pub fn action_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, AgentStep::Action { .. }))
            .count()
    }

    /// Get count of observations (tool results)
    pub fn observation_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, AgentStep::Observation { .. }))
            .count()
    }

    /// Check if the turn ended with a final answer
    pub fn is_success(&self) -> bool {
        self.steps
            .iter()
            .any(|s| matches!(s, AgentStep::FinalAnswer { .. }))
    }
}
