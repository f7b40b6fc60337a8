//! Configuration normalization and validation
//!
//! Decoded task files are normalized exactly once into an immutable
//! [`Config`]. Task execution modes are not checked here; a task with a bad
//! mode only fails when it is run. [`validate_config`] reports those problems
//! up front for `--check`.

use crate::config::model::{Config, Delimiters, Settings, Task};
use crate::config::types::{SettingsBlock, TaskFile};
use crate::error::{ConfigError, ConfigResult, TemplateError};
use crate::runner::render;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Build a [`Config`] from a decoded task file (if any) and manifest tasks.
///
/// Task file entries take precedence over manifest scripts of the same name.
pub fn finalize(
    file: Option<TaskFile>,
    manifest_tasks: Vec<Task>,
    root_dir: PathBuf,
) -> ConfigResult<Config> {
    let file = file.unwrap_or_default();
    let settings = normalize_settings(file.config)?;

    let mut tasks: BTreeMap<String, Task> = file
        .tasks
        .into_iter()
        .map(|(name, def)| {
            let task = Task {
                name: name.clone(),
                description: def.description.unwrap_or_default(),
                command: def.command,
                pipeline: def.pipeline,
            };
            (name, task)
        })
        .collect();

    let shadowed_scripts = merge_tasks(&mut tasks, manifest_tasks);

    Ok(Config {
        tasks,
        variables: file.variables,
        settings,
        root_dir,
        shadowed_scripts,
    })
}

/// Insert `extra` tasks that do not collide with existing ones.
///
/// Returns the names that were skipped because of a collision.
pub fn merge_tasks(tasks: &mut BTreeMap<String, Task>, extra: Vec<Task>) -> Vec<String> {
    let mut shadowed = Vec::new();
    for task in extra {
        if tasks.contains_key(&task.name) {
            shadowed.push(task.name);
        } else {
            tasks.insert(task.name.clone(), task);
        }
    }
    shadowed
}

/// Apply defaults to the `config` block
pub fn normalize_settings(block: SettingsBlock) -> ConfigResult<Settings> {
    let delimiters = match block.delimiters.as_slice() {
        [] => Delimiters::default(),
        [open, close] if !open.is_empty() && !close.is_empty() => {
            Delimiters::new(open.clone(), close.clone())
        }
        other => {
            return Err(ConfigError::Invalid(format!(
                "delimiters must be two non-empty strings, got {:?}",
                other
            )))
        }
    };

    let interpreter = match block.interpreter {
        None => Settings::default().interpreter,
        Some(interpreter) if interpreter.is_empty() || interpreter[0].is_empty() => {
            return Err(ConfigError::Invalid(
                "interpreter must name a program".to_string(),
            ))
        }
        Some(interpreter) => interpreter,
    };

    Ok(Settings {
        delimiters,
        interpreter,
        render_commands: block.render_commands,
    })
}

/// A problem found by [`validate_config`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskProblem {
    InvalidMode { task: String },
    Description { task: String, error: TemplateError },
    Command { task: String, command: String, error: TemplateError },
}

impl fmt::Display for TaskProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskProblem::InvalidMode { task } => write!(
                f,
                "task '{}' must define exactly one of `command` or `pipeline`",
                task
            ),
            TaskProblem::Description { task, error } => {
                write!(f, "task '{}' has a bad description: {}", task, error)
            }
            TaskProblem::Command {
                task,
                command,
                error,
            } => write!(f, "task '{}' has a bad command '{}': {}", task, command, error),
        }
    }
}

/// Check every task's mode and templates without running anything
pub fn validate_config(config: &Config) -> Vec<TaskProblem> {
    let delimiters = &config.settings.delimiters;
    let mut problems = Vec::new();

    for task in config.tasks.values() {
        if let Err(error) = render(&task.description, delimiters, &config.variables) {
            problems.push(TaskProblem::Description {
                task: task.name.clone(),
                error,
            });
        }

        let Some(mode) = task.mode() else {
            problems.push(TaskProblem::InvalidMode {
                task: task.name.clone(),
            });
            continue;
        };

        if !config.settings.render_commands {
            continue;
        }
        for command in mode.commands() {
            if let Err(error) = render(command, delimiters, &config.variables) {
                problems.push(TaskProblem::Command {
                    task: task.name.clone(),
                    command: command.to_string(),
                    error,
                });
            }
        }
    }

    problems
}
