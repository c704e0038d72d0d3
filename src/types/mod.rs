//! Shared result types

pub mod result;

pub use result::{RunResult, TokenUsage};
