use crate::{
    core::{agent::Agent, scratchpad::Scratchpad, steps::AgentStep},
    error::{AgentError, Result},
    services::{
        mistral_client::ChatCompletionRequest,
        tool_call_utils::{
            extract_arguments_str, extract_function_info, extract_tool_call_id,
            parse_function_arguments,
        },
    },
    types::result::{RunResult, TokenUsage},
};
use serde_json::{json, Value};
use std::time::Instant;
use tokio::time::timeout;

impl Agent {
    /// Run one conversation turn to completion.
    ///
    /// The loop alternates between asking the model for a completion and
    /// invoking whichever tool it requests, feeding each result back, until
    /// the model replies with plain content (the final answer). Any model or
    /// tool failure fails the whole turn; the caller decides whether the
    /// process survives it.
    pub async fn run(&self, prompt: &str) -> Result<RunResult> {
        let start_time = Instant::now();
        let mut scratchpad = Scratchpad::with_default_system();

        scratchpad.add_step(AgentStep::Task {
            content: prompt.to_string(),
        });

        let mut tokens: Option<TokenUsage> = None;
        let mut iteration = 0;

        while iteration < self.max_iterations() {
            iteration += 1;

            let messages = scratchpad.as_messages();
            let tools = self.function_factory().function_specs();

            let mut chat_request = ChatCompletionRequest::new(self.model().to_owned(), messages)
                .with_max_tokens(self.max_tokens());

            if !tools.is_empty() {
                chat_request = chat_request
                    .with_tools(tools)
                    .with_tool_choice(json!("auto"));
            }

            let request_body = chat_request.into_value();

            let response = timeout(self.timeout(), self.make_raw_request(&request_body))
                .await
                .map_err(|_| AgentError::Timeout("Model API call timed out".to_string()))??;

            let assistant_message = extract_assistant_message(&response)?;
            accumulate_usage(&mut tokens, &response);

            let tool_calls = assistant_message
                .get("tool_calls")
                .and_then(|value| value.as_array())
                .filter(|calls| !calls.is_empty());

            let Some(tool_calls) = tool_calls else {
                let answer = assistant_message
                    .get("content")
                    .and_then(|value| value.as_str())
                    .unwrap_or("")
                    .trim()
                    .to_string();

                scratchpad.add_step(AgentStep::FinalAnswer {
                    answer: answer.clone(),
                });

                return Ok(RunResult::new(
                    answer,
                    scratchpad.steps().to_vec(),
                    tokens,
                    start_time.elapsed(),
                    iteration,
                ));
            };

            for tool_call in tool_calls {
                let tool_call_id = extract_tool_call_id(tool_call).to_string();

                let (function, function_name) =
                    extract_function_info(tool_call).ok_or_else(|| {
                        AgentError::InvalidArgument("Tool call missing function".to_string())
                    })?;

                let function_name = match function_name {
                    Some(name) if !name.is_empty() => name,
                    _ => {
                        return Err(AgentError::InvalidArgument(
                            "Tool call missing function name".to_string(),
                        ))
                    }
                };

                let arguments =
                    parse_function_arguments(extract_arguments_str(&function), &function_name)?;

                scratchpad.add_step(AgentStep::Action {
                    tool_name: function_name.clone(),
                    tool_call_id: tool_call_id.clone(),
                    arguments: arguments.clone(),
                });

                // Tool failures (including unknown tool names) fail the turn.
                let result = self
                    .function_factory()
                    .execute_function(&function_name, arguments)
                    .await?;

                scratchpad.add_step(AgentStep::Observation {
                    tool_call_id,
                    result: result.to_string(),
                });
            }
        }

        Err(AgentError::MaxIterations(self.max_iterations()))
    }
}

fn extract_assistant_message(response: &Value) -> Result<Value> {
    let choices = response
        .get("choices")
        .and_then(|value| value.as_array())
        .ok_or_else(|| {
            AgentError::Model("Missing 'choices' array in completion response".to_string())
        })?;

    let first_choice = choices.first().ok_or_else(|| {
        AgentError::Model("Completion response contained no choices".to_string())
    })?;

    first_choice
        .get("message")
        .cloned()
        .ok_or_else(|| AgentError::Model("Completion response missing assistant message".to_string()))
}

fn accumulate_usage(tokens: &mut Option<TokenUsage>, response: &Value) {
    let usage = response.get("usage").and_then(|usage| {
        Some(TokenUsage {
            prompt_tokens: usage.get("prompt_tokens")?.as_u64()? as u32,
            completion_tokens: usage.get("completion_tokens")?.as_u64()? as u32,
            total_tokens: usage.get("total_tokens")?.as_u64()? as u32,
        })
    });

    if let Some(usage) = usage {
        *tokens = Some(match tokens.take() {
            Some(total) => TokenUsage {
                prompt_tokens: total.prompt_tokens + usage.prompt_tokens,
                completion_tokens: total.completion_tokens + usage.completion_tokens,
                total_tokens: total.total_tokens + usage.total_tokens,
            },
            None => usage,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_assistant_message() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": "hi"}}]
        });
        let message = extract_assistant_message(&response).unwrap();
        assert_eq!(message["content"], "hi");

        let empty = json!({"choices": []});
        assert!(extract_assistant_message(&empty).is_err());

        let missing = json!({});
        assert!(extract_assistant_message(&missing).is_err());
    }

    #[test]
    fn test_accumulate_usage_sums_iterations() {
        let mut tokens = None;
        let response = json!({
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        });

        accumulate_usage(&mut tokens, &response);
        accumulate_usage(&mut tokens, &response);

        let total = tokens.unwrap();
        assert_eq!(total.prompt_tokens, 20);
        assert_eq!(total.completion_tokens, 10);
        assert_eq!(total.total_tokens, 30);
    }

    #[test]
    fn test_accumulate_usage_absent() {
        let mut tokens = None;
        accumulate_usage(&mut tokens, &json!({}));
        assert!(tokens.is_none());
    }
}
