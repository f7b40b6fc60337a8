//! Command execution
//!
//! Each command is handed to the interpreter as a script. Trailing arguments
//! become the script's positional parameters, so `$1`, `$2` and `"$@"` work
//! inside the command text.

use crate::error::{CommandFailure, ExecutionError, ExecutionResult};
use crate::runner::Context;
use std::ffi::OsString;
use std::process::{Command as StdCommand, Stdio};

/// Run one shell script with inherited standard streams and wait for it.
///
/// `script_name` becomes `$0`.
pub fn execute_command(
    script: &str,
    script_name: &str,
    args: &[OsString],
    interpreter: &[String],
    ctx: &Context,
) -> ExecutionResult<()> {
    let failed = |reason: CommandFailure| ExecutionError::CommandFailed {
        command: script.to_string(),
        reason,
    };

    let (program, interpreter_args) = interpreter.split_first().ok_or_else(|| {
        failed(CommandFailure::Spawn(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "no interpreter configured",
        )))
    })?;

    ctx.print_command(script);

    let mut command = StdCommand::new(program);
    command
        .args(interpreter_args)
        .arg(script)
        .arg(script_name)
        .args(args)
        .current_dir(&ctx.working_dir);

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = command
        .status()
        .map_err(|e| failed(CommandFailure::Spawn(e)))?;

    if !status.success() {
        return Err(failed(CommandFailure::Exit(status)));
    }

    Ok(())
}
