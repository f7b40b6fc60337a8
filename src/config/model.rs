//! Normalized configuration model
//!
//! A [`Config`] is built once per invocation and not modified afterwards.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Default interpreter used to run task commands
pub const DEFAULT_INTERPRETER: &[&str] = &["sh", "-c"];

/// Fully populated configuration for one project
#[derive(Debug, Clone)]
pub struct Config {
    /// Tasks keyed by name, iterated in name order
    pub tasks: BTreeMap<String, Task>,

    /// Variables visible to every template
    pub variables: HashMap<String, String>,

    /// Runner settings with defaults applied
    pub settings: Settings,

    /// Directory the configuration was found in
    pub root_dir: PathBuf,

    /// Manifest scripts hidden by a task file entry of the same name
    pub shadowed_scripts: Vec<String>,
}

impl Config {
    /// Look up a task by name
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    /// Task names in registration order
    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }
}

/// A named unit of work
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub command: Option<String>,
    pub pipeline: Vec<String>,
}

/// How a task runs its commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    Single(&'a str),
    Pipeline(&'a [String]),
}

impl Task {
    /// Create a single-command task
    pub fn with_command(name: impl Into<String>, command: impl Into<String>) -> Self {
        Task {
            name: name.into(),
            command: Some(command.into()),
            ..Default::default()
        }
    }

    /// Create a pipeline task
    pub fn with_pipeline<I, S>(name: impl Into<String>, pipeline: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Task {
            name: name.into(),
            pipeline: pipeline.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Resolve the execution mode, `None` if zero or both ways are declared.
    ///
    /// An empty command string counts as unset.
    pub fn mode(&self) -> Option<Mode<'_>> {
        let command = self.command.as_deref().filter(|c| !c.is_empty());
        match (command, self.pipeline.is_empty()) {
            (Some(command), true) => Some(Mode::Single(command)),
            (None, false) => Some(Mode::Pipeline(&self.pipeline)),
            _ => None,
        }
    }
}

impl<'a> Mode<'a> {
    /// Commands to run, in order
    pub fn commands(&self) -> Vec<&'a str> {
        match *self {
            Mode::Single(command) => vec![command],
            Mode::Pipeline(pipeline) => pipeline.iter().map(String::as_str).collect(),
        }
    }
}

/// Placeholder delimiter pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Delimiters {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters::new("{{", "}}")
    }
}

/// Runner settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub delimiters: Delimiters,
    pub interpreter: Vec<String>,
    pub render_commands: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            delimiters: Delimiters::default(),
            interpreter: DEFAULT_INTERPRETER.iter().map(|s| s.to_string()).collect(),
            render_commands: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode() {
        let task = Task::with_command("build", "cargo build");
        assert_eq!(task.mode(), Some(Mode::Single("cargo build")));
        assert_eq!(task.mode().unwrap().commands(), vec!["cargo build"]);
    }

    #[test]
    fn test_pipeline_mode_keeps_order() {
        let task = Task::with_pipeline("ci", ["fmt", "lint", "test"]);
        assert_eq!(task.mode().unwrap().commands(), vec!["fmt", "lint", "test"]);
    }

    #[test]
    fn test_invalid_modes() {
        let neither = Task {
            name: "empty".to_string(),
            ..Default::default()
        };
        assert_eq!(neither.mode(), None);

        let mut both = Task::with_pipeline("both", ["a"]);
        both.command = Some("b".to_string());
        assert_eq!(both.mode(), None);

        let blank = Task::with_command("blank", "");
        assert_eq!(blank.mode(), None);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.delimiters, Delimiters::new("{{", "}}"));
        assert_eq!(settings.interpreter, vec!["sh", "-c"]);
        assert!(settings.render_commands);
    }
}
