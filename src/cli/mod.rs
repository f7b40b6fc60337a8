//! CLI interface and argument parsing
//!
//! This module turns the loaded configuration into one subcommand per task.

pub mod app;

// Re-export main types
pub use app::*;
