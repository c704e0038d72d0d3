pub mod agent;
pub mod scratchpad;
pub mod steps;

pub use crate::types::result::{RunResult, TokenUsage};
pub use agent::Agent;
pub use scratchpad::Scratchpad;
pub use steps::AgentStep;
