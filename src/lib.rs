//! mistral-agent-rs: a command-line chat agent for Mistral tool calling
//!
//! The crate wires a Mistral chat-completions client, a two-tool registry
//! (integer addition and SerpAPI-backed internet search), and an executor
//! loop that lets the model call tools before producing a final answer.
//! Tool selection and reasoning are entirely the remote model's; this crate
//! supplies configuration, dispatch, and the interactive loop.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mistral_agent_rs::{Agent, FunctionFactory, MistralClient, tools::MathTool};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = std::env::var("MISTRAL_API_KEY")?;
//!     let mut function_factory = FunctionFactory::new();
//!     function_factory.register_tool(MathTool::new());
//!
//!     let client = MistralClient::new(api_key)?;
//!     let agent = Agent::new(client, function_factory);
//!
//!     let result = agent.run("What is 2 + 2?").await?;
//!     println!("{}", result.output);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod tools;
pub mod types;

pub use crate::core::{Agent, AgentStep, RunResult, Scratchpad, TokenUsage};
pub use config::Config;
pub use error::{AgentError, Result};
pub use services::mistral_client::MistralClient;
pub use services::serpapi::SerpApiClient;
pub use tools::{FunctionFactory, Tool};

#[cfg(feature = "cli")]
pub mod cli;
