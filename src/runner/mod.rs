//! Task execution engine
//!
//! This module renders templates and runs task commands as child processes.

pub mod command;
pub mod context;
pub mod task;
pub mod template;

// Re-export main types
pub use command::*;
pub use context::*;
pub use task::*;
pub use template::*;
