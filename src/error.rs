//! Error types for trun

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for trun operations
pub type Result<T> = std::result::Result<T, TrunError>;

/// Main error type for trun
#[derive(Error, Debug)]
pub enum TrunError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Task execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// One or more tasks failed `--check`
    #[error("{0} problem(s) found in task file")]
    CheckFailed(usize),
}

impl TrunError {
    /// Exit code the process should terminate with for this error.
    ///
    /// A command that ran and exited non-zero hands its own code back to the
    /// calling shell; every other failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            TrunError::Execution(ExecutionError::CommandFailed {
                reason: CommandFailure::Exit(status),
                ..
            }) => status.code().filter(|code| *code != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

/// Configuration discovery, decoding and normalization errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not find a task file (searched upward from {0})")]
    NotFound(PathBuf),

    #[error("Failed to decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to decode manifest '{path}': {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Task '{0}' is not defined")]
    TaskNotFound(String),

    #[error("Failed to load environment file '{path}': {error}")]
    Environment { path: PathBuf, error: String },
}

/// Template parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed placeholder starting at byte {position}")]
    Unclosed { position: usize },

    #[error("empty placeholder at byte {position}")]
    EmptyPlaceholder { position: usize },

    #[error("invalid variable name '{name}' at byte {position}")]
    InvalidName { position: usize, name: String },
}

/// Task execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Task '{0}' must define exactly one of `command` or `pipeline`")]
    InvalidMode(String),

    #[error("Failed to render command '{command}': {source}")]
    Render {
        command: String,
        #[source]
        source: TemplateError,
    },

    #[error("Command '{command}' failed: {reason}")]
    CommandFailed {
        command: String,
        reason: CommandFailure,
    },
}

/// Why a spawned command did not succeed
#[derive(Error, Debug)]
pub enum CommandFailure {
    #[error("could not start process: {0}")]
    Spawn(#[from] io::Error),

    #[error("{0}")]
    Exit(ExitStatus),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for template rendering
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn exit_status(code: i32) -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(code << 8)
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_propagates_child_status() {
        let err = TrunError::from(ExecutionError::CommandFailed {
            command: "exit 3".to_string(),
            reason: CommandFailure::Exit(exit_status(3)),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        let err = TrunError::from(ExecutionError::InvalidMode("build".to_string()));
        assert_eq!(err.exit_code(), 1);

        let err = TrunError::from(ConfigError::NotFound(PathBuf::from("/tmp")));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_spawn_failure_message() {
        let err = ExecutionError::CommandFailed {
            command: "echo hi".to_string(),
            reason: CommandFailure::Spawn(io::Error::new(io::ErrorKind::NotFound, "no sh")),
        };
        let message = err.to_string();
        assert!(message.contains("echo hi"));
        assert!(message.contains("no sh"));
    }
}
