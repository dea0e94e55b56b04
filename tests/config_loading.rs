// tests/config_loading.rs
mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use coresched::config::{
    FileFormat, load_problem, load_resources, load_tasks, parse_resources, parse_tasks,
};
use coresched::dag::Scheduler;
use coresched::errors::SchedError;

type TestResult = Result<(), Box<dyn Error>>;

fn temp_file(suffix: &str, contents: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    write!(file, "{contents}")?;
    Ok(file)
}

const TASKS_YAML: &str = r#"
task1:
  cores_required: 2
  execution_time: 100
task2:
  cores_required: 1
  execution_time: 50
  parent_tasks: task1
task3:
  cores_required: 4
  execution_time: 30
  parent_tasks: "task1, task2"
"#;

const RESOURCES_YAML: &str = r#"
compute2: 4
compute1: 2
"#;

#[test]
fn yaml_files_load_and_schedule() -> TestResult {
    init_tracing();

    let tasks = temp_file(".yaml", TASKS_YAML)?;
    let resources = temp_file(".yml", RESOURCES_YAML)?;

    let problem = load_problem(tasks.path(), resources.path())?;
    assert_eq!(problem.tasks.len(), 3);
    assert_eq!(problem.tasks[2].name, "task3");
    assert_eq!(problem.tasks[2].parents, vec!["task1", "task2"]);
    assert_eq!(problem.resources[0].name, "compute1");
    assert_eq!(problem.resources[0].cores_total, 2);

    let schedule = Scheduler::from_problem(&problem)?.simulate();
    assert_eq!(schedule.priority_names(), vec!["task3", "task1", "task2"]);

    let t1 = schedule.placement_of("task1").expect("task1 placed");
    assert_eq!((t1.tick, t1.resource.as_str()), (0, "compute1"));
    let t2 = schedule.placement_of("task2").expect("task2 placed");
    assert_eq!((t2.tick, t2.resource.as_str()), (100, "compute1"));
    let t3 = schedule.placement_of("task3").expect("task3 placed");
    assert_eq!((t3.tick, t3.resource.as_str()), (150, "compute2"));
    assert_eq!(schedule.makespan, 180);
    Ok(())
}

#[test]
fn toml_nested_tables_with_after_lists() -> TestResult {
    init_tracing();

    let tasks = temp_file(
        ".toml",
        r#"
[task.A]
cores_required = 1
execution_time = 5

[task.B]
cores_required = 1
execution_time = 5
after = ["A"]
"#,
    )?;
    let resources = temp_file(
        ".toml",
        r#"
[resource]
cpu = 1
"#,
    )?;

    let problem = load_problem(tasks.path(), resources.path())?;
    assert_eq!(problem.tasks[1].parents, vec!["A"]);

    let schedule = Scheduler::from_problem(&problem)?.simulate();
    assert_eq!(schedule.makespan, 10);
    Ok(())
}

#[test]
fn toml_flat_tables_parse() -> TestResult {
    init_tracing();

    let tasks = parse_tasks(
        r#"
[build]
cores_required = 4
execution_time = 12

[test]
cores_required = 2
execution_time = 3
parent_tasks = "build"
"#,
        FileFormat::Toml,
    )?;

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].name, "build");
    assert_eq!(tasks[1].parents, vec!["build"]);
    Ok(())
}

#[test]
fn blank_parent_entries_are_ignored() -> TestResult {
    init_tracing();

    let tasks = parse_tasks(
        r#"
a:
  cores_required: 1
  execution_time: 1
  parent_tasks: ""
b:
  cores_required: 1
  execution_time: 1
  parent_tasks: " a , , "
c:
  cores_required: 1
  execution_time: 1
  parent_tasks:
"#,
        FileFormat::Yaml,
    )?;

    assert!(tasks[0].parents.is_empty());
    assert_eq!(tasks[1].parents, vec!["a"]);
    assert!(tasks[2].parents.is_empty());
    Ok(())
}

#[test]
fn non_integer_cores_are_an_invalid_resource_spec() -> TestResult {
    init_tracing();

    let resources = temp_file(".yaml", "compute1: 2\ncompute2: four\n")?;
    match load_resources(resources.path()) {
        Err(SchedError::InvalidResourceSpec { resource, reason }) => {
            assert_eq!(resource, "compute2");
            assert!(reason.contains("integer"));
        }
        other => panic!("Expected InvalidResourceSpec, got: {:?}", other),
    }

    let resources = temp_file(".toml", "cpu = 2.5\n")?;
    assert!(matches!(
        load_resources(resources.path()),
        Err(SchedError::InvalidResourceSpec { ref resource, .. }) if resource == "cpu"
    ));

    let resources = temp_file(".toml", "cpu = -3\n")?;
    assert!(matches!(
        load_resources(resources.path()),
        Err(SchedError::InvalidResourceSpec { ref resource, .. }) if resource == "cpu"
    ));
    Ok(())
}

#[test]
fn negative_task_fields_are_rejected() -> TestResult {
    init_tracing();

    let tasks = temp_file(".yaml", "t:\n  cores_required: -1\n  execution_time: 3\n")?;
    match load_tasks(tasks.path()) {
        Err(SchedError::InvalidTaskSpec { task, reason }) => {
            assert_eq!(task, "t");
            assert!(reason.contains("cores_required"));
        }
        other => panic!("Expected InvalidTaskSpec, got: {:?}", other),
    }
    Ok(())
}

#[test]
fn unknown_parent_in_file_fails_at_scheduler_build() -> TestResult {
    init_tracing();

    let tasks = temp_file(
        ".yaml",
        "a:\n  cores_required: 1\n  execution_time: 1\n  parent_tasks: ghost\n",
    )?;
    let resources = temp_file(".yaml", "cpu: 1\n")?;

    let problem = load_problem(tasks.path(), resources.path())?;
    match Scheduler::from_problem(&problem) {
        Err(SchedError::UnknownParent { task, parent }) => {
            assert_eq!(task, "a");
            assert_eq!(parent, "ghost");
        }
        other => panic!("Expected UnknownParent, got: {:?}", other.map(|_| ())),
    }
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    init_tracing();

    let result = load_tasks("/definitely/not/here/tasks.yaml");
    assert!(matches!(result, Err(SchedError::IoError(_))));
}

#[test]
fn malformed_toml_is_a_parse_error() -> TestResult {
    init_tracing();

    let tasks = temp_file(".toml", "[task.A\ncores_required = 1\n")?;
    assert!(matches!(load_tasks(tasks.path()), Err(SchedError::TomlError(_))));
    Ok(())
}

#[test]
fn format_is_chosen_by_extension() {
    assert_eq!(FileFormat::from_path(Path::new("tasks.yaml")), FileFormat::Yaml);
    assert_eq!(FileFormat::from_path(Path::new("tasks.YML")), FileFormat::Yaml);
    assert_eq!(FileFormat::from_path(Path::new("tasks.toml")), FileFormat::Toml);
    assert_eq!(FileFormat::from_path(Path::new("tasks")), FileFormat::Toml);
}

#[test]
fn missing_task_field_names_the_task() {
    init_tracing();

    let result = parse_tasks(
        "a:\n  cores_required: 1\n  execution_time: 2\nb:\n  cores_required: 1\n",
        FileFormat::Yaml,
    );
    match result {
        Err(SchedError::InvalidTaskSpec { task, reason }) => {
            assert_eq!(task, "b");
            assert!(reason.contains("missing key `execution_time`"));
        }
        other => panic!("Expected InvalidTaskSpec, got: {:?}", other),
    }

    let result = parse_tasks("[task.solo]\nexecution_time = 4\n", FileFormat::Toml);
    match result {
        Err(SchedError::InvalidTaskSpec { task, reason }) => {
            assert_eq!(task, "solo");
            assert!(reason.contains("missing key `cores_required`"));
        }
        other => panic!("Expected InvalidTaskSpec, got: {:?}", other),
    }
}

#[test]
fn non_integer_task_field_names_the_task() -> TestResult {
    init_tracing();

    let tasks = temp_file(
        ".yaml",
        "a:\n  cores_required: two\n  execution_time: 2\nb:\n  cores_required: 1\n  execution_time: 1\n",
    )?;
    match load_tasks(tasks.path()) {
        Err(SchedError::InvalidTaskSpec { task, reason }) => {
            assert_eq!(task, "a");
            assert!(reason.contains("cores_required is not an integer"));
        }
        other => panic!("Expected InvalidTaskSpec, got: {:?}", other),
    }

    let result = parse_tasks(
        "[build]\ncores_required = 2\nexecution_time = 1.5\n",
        FileFormat::Toml,
    );
    assert!(matches!(
        result,
        Err(SchedError::InvalidTaskSpec { ref task, ref reason })
            if task == "build" && reason.contains("execution_time")
    ));
    Ok(())
}

#[test]
fn resource_table_mixed_with_flat_entries_is_a_config_error() {
    init_tracing();

    let result = parse_resources("gpu = 2\n\n[resource]\ncpu = 4\n", FileFormat::Toml);
    match result {
        Err(SchedError::ConfigError(msg)) => {
            assert!(msg.contains("'resource' is a table"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}
