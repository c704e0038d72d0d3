//! External service clients and the executor loop

mod execution;
pub mod mistral_client;
pub mod serpapi;
mod tool_call_utils;
