//! Task execution
//!
//! Runs a task's command, or its pipeline in declared order, stopping at the
//! first command that fails. Commands that already ran are not undone.

use crate::config::{Config, Task};
use crate::error::{ExecutionError, ExecutionResult, TemplateResult};
use crate::runner::{execute_command, render, Context};
use std::ffi::OsString;

/// Execute `task` with `args` forwarded as positional parameters
pub fn run(
    task: &Task,
    config: &Config,
    args: &[OsString],
    ctx: &Context,
) -> ExecutionResult<()> {
    let mode = task
        .mode()
        .ok_or_else(|| ExecutionError::InvalidMode(task.name.clone()))?;

    let commands = mode.commands();
    ctx.print_debug(&format!(
        "Running task '{}' ({} command(s))",
        task.name,
        commands.len()
    ));

    for command in commands {
        let script = prepare(command, config)?;
        execute_command(
            &script,
            &task.name,
            args,
            &config.settings.interpreter,
            ctx,
        )?;
    }

    ctx.print_debug(&format!("Task completed: {}", task.name));
    Ok(())
}

/// Render a command string if command rendering is enabled
fn prepare(command: &str, config: &Config) -> ExecutionResult<String> {
    if !config.settings.render_commands {
        return Ok(command.to_string());
    }

    render(command, &config.settings.delimiters, &config.variables).map_err(|source| {
        ExecutionError::Render {
            command: command.to_string(),
            source,
        }
    })
}

/// Render a task's description
pub fn describe(task: &Task, config: &Config) -> TemplateResult<String> {
    render(&task.description, &config.settings.delimiters, &config.variables)
}
