//! Main CLI application

use crate::config::{
    load_env_file, load_task_file, locate_from_current_dir, validate_config, Config,
};
use crate::error::{ConfigError, TemplateError, TrunError};
use crate::runner::{self, describe, Context, Verbosity};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

/// Name of the positional argument holding forwarded task arguments
const TASK_ARGS: &str = "args";

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Parsed configuration
    config: Config,
    /// Tasks left out of the command because their description did not render
    skipped: Vec<(String, TemplateError)>,
}

impl App {
    /// Create a new app by discovering the task file from the current directory
    pub fn new() -> Result<Self, TrunError> {
        let config = locate_from_current_dir()?;
        Ok(Self::from_config(config))
    }

    /// Create app with a specific task file
    pub fn with_config_file(path: PathBuf) -> Result<Self, TrunError> {
        let config = load_task_file(&path)?;
        Ok(Self::from_config(config))
    }

    /// Create app from an already loaded configuration
    pub fn from_config(config: Config) -> Self {
        let (command, skipped) = build_command(&config);
        App {
            command,
            config,
            skipped,
        }
    }

    /// Run the application with the given command line (including the program name)
    pub fn run<I, T>(mut self, args: I) -> Result<(), TrunError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.command.clone().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) => {
                // An unknown task may be one that was skipped
                if e.use_stderr() {
                    self.report_skipped(&Context::new());
                }
                e.exit()
            }
        };

        let ctx = Context::new().with_verbosity(get_verbosity(&matches));

        self.report_skipped(&ctx);
        for name in &self.config.shadowed_scripts {
            ctx.print_debug(&format!(
                "Script '{}' from package.json is shadowed by the task file",
                name
            ));
        }

        if matches.get_flag("check") {
            return check(&self.config, &ctx);
        }

        // Check if a task was specified
        let (task_name, task_matches) = match matches.subcommand() {
            Some((name, sub_matches)) => (name.to_string(), sub_matches),
            None => {
                // No task specified, show help
                let _ = self.command.print_help();
                println!();
                return Ok(());
            }
        };

        let task = self
            .config
            .task(&task_name)
            .ok_or_else(|| ConfigError::TaskNotFound(task_name.clone()))?;

        let task_args: Vec<OsString> = task_matches
            .get_many::<OsString>(TASK_ARGS)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        match load_env_file(&self.config.root_dir) {
            Ok(true) => ctx.print_debug("Loaded .env from the project root"),
            Ok(false) => {}
            Err(e) => ctx.print_warning(&e.to_string()),
        }

        ctx.print_debug(&format!(
            "Project root: {}",
            self.config.root_dir.display()
        ));

        runner::run(task, &self.config, &task_args, &ctx)?;

        Ok(())
    }

    fn report_skipped(&self, ctx: &Context) {
        for (name, error) in &self.skipped {
            ctx.print_warning(&format!(
                "Task '{}' is unavailable, its description failed to render: {}",
                name, error
            ));
        }
    }
}

/// Root command with the global options and no tasks
fn root_command() -> Command {
    Command::new("trun")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A project-local task runner")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to a task file (skips discovery)"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Validate every task without running anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print nothing but command output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Build the clap command from configuration.
///
/// Also returns the tasks that were left out because their description could
/// not be rendered.
pub fn build_command(config: &Config) -> (Command, Vec<(String, TemplateError)>) {
    let mut cmd = root_command();

    let mut skipped = Vec::new();

    // Tasks are stored sorted by name, so subcommands are registered in name order
    for task in config.tasks.values() {
        let about = match describe(task, config) {
            Ok(about) => about,
            Err(e) => {
                skipped.push((task.name.clone(), e));
                continue;
            }
        };

        let task_cmd = Command::new(task.name.clone())
            .about(about)
            .disable_help_flag(true)
            .arg(
                Arg::new(TASK_ARGS)
                    .value_name("ARGS")
                    .help("Arguments available to the task as $1, $2, ...")
                    .value_parser(value_parser!(OsString))
                    .num_args(0..)
                    .trailing_var_arg(true)
                    .allow_hyphen_values(true),
            );

        cmd = cmd.subcommand(task_cmd);
    }

    (cmd, skipped)
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Report every problem in the configuration
fn check(config: &Config, ctx: &Context) -> Result<(), TrunError> {
    let problems = validate_config(config);
    if problems.is_empty() {
        ctx.print_info(&format!("{} task(s) OK", config.tasks.len()));
        return Ok(());
    }

    for problem in &problems {
        ctx.print_error(&problem.to_string());
    }
    Err(TrunError::CheckFailed(problems.len()))
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), TrunError> {
    let args: Vec<OsString> = std::env::args_os().collect();
    let file_path = file_arg(&args);

    let app = if let Some(path) = file_path {
        App::with_config_file(path)?
    } else {
        App::new()?
    };

    app.run(args)
}

/// Find the `--file` option before the task list is known.
///
/// Parses the global options only, everything from the task name on is left
/// to the task. A command line that does not parse here yields `None`, and
/// the full parse reports the problem.
fn file_arg(args: &[OsString]) -> Option<PathBuf> {
    root_command()
        .disable_help_flag(true)
        .disable_version_flag(true)
        .allow_external_subcommands(true)
        .external_subcommand_value_parser(value_parser!(OsString))
        .try_get_matches_from(args)
        .ok()?
        .get_one::<PathBuf>("file")
        .cloned()
}
