//! Tools module containing tool abstractions and the two built-in tools

pub mod function_factory;
pub mod math;
pub mod search;
pub mod tool;

pub use function_factory::FunctionFactory;
pub use math::MathTool;
pub use search::SearchInternetTool;
pub use tool::{Tool, ToolRegistry};
