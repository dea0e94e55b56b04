// src/config/model.rs

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde::de::IgnoredAny;

/// Task description file.
///
/// Tasks may be listed at the top level:
///
/// ```yaml
/// task1:
///   cores_required: 2
///   execution_time: 100
/// task2:
///   cores_required: 1
///   execution_time: 50
///   parent_tasks: task1
/// ```
///
/// or, in TOML, nested under a `[task.<name>]` table:
///
/// ```toml
/// [task.task2]
/// cores_required = 1
/// execution_time = 50
/// after = ["task1"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTaskFile {
    Nested(NestedTasks),
    Flat(BTreeMap<String, TaskRecord>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NestedTasks {
    pub task: BTreeMap<String, TaskRecord>,
}

impl RawTaskFile {
    /// Records keyed by task name, in name order.
    pub fn into_records(self) -> BTreeMap<String, TaskRecord> {
        match self {
            RawTaskFile::Nested(nested) => nested.task,
            RawTaskFile::Flat(records) => records,
        }
    }
}

/// One `<name>: { ... }` entry in a task file.
///
/// The numeric fields are optional at this layer so that a missing or
/// malformed value is reported against the task name.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub cores_required: Option<RawInt>,
    #[serde(default)]
    pub execution_time: Option<RawInt>,

    /// Prerequisite task names: either `"a, b"` or `["a", "b"]`.
    #[serde(default, alias = "after")]
    pub parent_tasks: Option<ParentList>,
}

impl TaskRecord {
    pub fn parent_names(&self) -> Vec<String> {
        self.parent_tasks
            .as_ref()
            .map(ParentList::names)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParentList {
    /// Comma-separated names; blanks are ignored.
    Csv(String),
    List(Vec<String>),
}

impl ParentList {
    pub fn names(&self) -> Vec<String> {
        match self {
            ParentList::Csv(s) => s
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            ParentList::List(names) => names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Resource description file: `<name>: <cores>` pairs, optionally nested
/// under a `[resource]` table in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawResourceFile {
    Nested(NestedResources),
    Flat(BTreeMap<String, RawCores>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NestedResources {
    pub resource: BTreeMap<String, RawCores>,
}

impl RawResourceFile {
    /// Records keyed by resource name, in name order.
    pub fn into_records(self) -> BTreeMap<String, RawCores> {
        match self {
            RawResourceFile::Nested(nested) => nested.resource,
            RawResourceFile::Flat(records) => records,
        }
    }
}

/// An integer field of a task record as written in the file.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum RawInt {
    Int(i64),
    NotAnInteger(IgnoredAny),
}

/// A core count as written in the file.
///
/// Anything that is not an integer lands in `Table` or `NotAnInteger`, so it
/// can be reported against the resource name instead of as a parse error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCores {
    Count(i64),
    /// A nested table where a count was expected, typically a `[resource]`
    /// table mixed with top-level `<name> = <cores>` pairs.
    Table(BTreeMap<String, IgnoredAny>),
    NotAnInteger(IgnoredAny),
}

/// On-disk format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
}

impl FileFormat {
    /// `.yaml` / `.yml` are YAML; everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            _ => FileFormat::Toml,
        }
    }
}
