//! Integration tests for task execution

mod common;

use common::create_test_config;
use std::ffi::OsString;
use std::fs;
use trun::config::locate;
use trun::error::{CommandFailure, ExecutionError};
use trun::runner::{run, Context, Verbosity};

fn context_in(dir: &std::path::Path) -> Context {
    Context::new()
        .with_working_dir(dir.to_path_buf())
        .with_verbosity(Verbosity::Silent)
}

#[test]
fn test_execute_simple_task() {
    let (temp_dir, _) = create_test_config(
        r#"
tasks:
  hello:
    command: echo "Hello, World!" > hello.txt
"#,
    );

    let config = locate(temp_dir.path()).unwrap();
    let task = config.task("hello").unwrap();
    run(task, &config, &[], &context_in(temp_dir.path())).unwrap();

    let out = fs::read_to_string(temp_dir.path().join("hello.txt")).unwrap();
    assert_eq!(out, "Hello, World!\n");
}

#[test]
fn test_variables_and_arguments() {
    let (temp_dir, _) = create_test_config(
        r#"
variables:
  greeting: Hello
tasks:
  greet:
    command: echo "{{greeting}}, $1 and $2" > greet.txt
"#,
    );

    let config = locate(temp_dir.path()).unwrap();
    let args = vec![OsString::from("Ann"), OsString::from("Bob")];
    run(
        config.task("greet").unwrap(),
        &config,
        &args,
        &context_in(temp_dir.path()),
    )
    .unwrap();

    let out = fs::read_to_string(temp_dir.path().join("greet.txt")).unwrap();
    assert_eq!(out, "Hello, Ann and Bob\n");
}

#[test]
fn test_pipeline_stops_at_failure() {
    let (temp_dir, _) = create_test_config(
        r#"
tasks:
  release:
    pipeline:
      - echo built >> steps.txt
      - "false"
      - echo published >> steps.txt
"#,
    );

    let config = locate(temp_dir.path()).unwrap();
    let result = run(
        config.task("release").unwrap(),
        &config,
        &[],
        &context_in(temp_dir.path()),
    );

    assert!(matches!(
        result,
        Err(ExecutionError::CommandFailed {
            ref command,
            reason: CommandFailure::Exit(_),
        }) if command == "false"
    ));
    let steps = fs::read_to_string(temp_dir.path().join("steps.txt")).unwrap();
    assert_eq!(steps, "built\n");
}

#[test]
fn test_invalid_task_does_not_affect_others() {
    let (temp_dir, _) = create_test_config(
        r#"
tasks:
  broken:
    description: declares nothing
  fine:
    command: touch fine.txt
"#,
    );

    let config = locate(temp_dir.path()).unwrap();
    let ctx = context_in(temp_dir.path());

    let broken = run(config.task("broken").unwrap(), &config, &[], &ctx);
    assert!(matches!(broken, Err(ExecutionError::InvalidMode(_))));

    run(config.task("fine").unwrap(), &config, &[], &ctx).unwrap();
    assert!(temp_dir.path().join("fine.txt").exists());
}

#[test]
fn test_custom_interpreter() {
    let (temp_dir, _) = create_test_config(
        r#"
config:
  interpreter: [bash, -c]
tasks:
  arrays:
    command: arr=(a b c); echo "${#arr[@]}" > count.txt
"#,
    );

    let config = locate(temp_dir.path()).unwrap();
    run(
        config.task("arrays").unwrap(),
        &config,
        &[],
        &context_in(temp_dir.path()),
    )
    .unwrap();

    let out = fs::read_to_string(temp_dir.path().join("count.txt")).unwrap();
    assert_eq!(out, "3\n");
}
