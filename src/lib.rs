//! trun - a project-local task runner
//!
//! trun finds the nearest `_tasks.yml` (or `package.json`) by walking up from
//! the working directory, exposes every task as a subcommand and runs the
//! chosen task's shell commands with the caller's arguments forwarded.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod runner;

// Re-export commonly used types
pub use error::{Result, TrunError};

/// Current version of trun
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
