// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{FileFormat, RawResourceFile, RawTaskFile};
use crate::config::validate::{resource_specs, task_specs};
use crate::errors::Result;
use crate::types::{Problem, ResourceSpec, TaskSpec};

/// Parse a task description document.
///
/// Tasks come back sorted by name, which keeps every downstream order
/// deterministic.
pub fn parse_tasks(contents: &str, format: FileFormat) -> Result<Vec<TaskSpec>> {
    let raw: RawTaskFile = match format {
        FileFormat::Toml => toml::from_str(contents)?,
        FileFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    task_specs(raw.into_records())
}

/// Parse a resource description document.
pub fn parse_resources(contents: &str, format: FileFormat) -> Result<Vec<ResourceSpec>> {
    let raw: RawResourceFile = match format {
        FileFormat::Toml => toml::from_str(contents)?,
        FileFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    resource_specs(raw.into_records())
}

pub fn load_tasks(path: impl AsRef<Path>) -> Result<Vec<TaskSpec>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let tasks = parse_tasks(&contents, FileFormat::from_path(path))?;
    debug!(path = %path.display(), count = tasks.len(), "loaded task descriptions");
    Ok(tasks)
}

pub fn load_resources(path: impl AsRef<Path>) -> Result<Vec<ResourceSpec>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let resources = parse_resources(&contents, FileFormat::from_path(path))?;
    debug!(path = %path.display(), count = resources.len(), "loaded resource descriptions");
    Ok(resources)
}

/// Load both description files.
///
/// This only reads and sanitises input; building a
/// [`crate::dag::Scheduler`] from the result runs the graph checks.
pub fn load_problem(tasks_path: impl AsRef<Path>, resources_path: impl AsRef<Path>) -> Result<Problem> {
    Ok(Problem {
        tasks: load_tasks(tasks_path)?,
        resources: load_resources(resources_path)?,
    })
}
