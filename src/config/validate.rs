// src/config/validate.rs

//! Turn raw file records into core input records.
//!
//! Only input sanitation lives here (integers in range, names present).
//! Graph-level checks such as unknown parents and cycles are left to the
//! scheduler so that they apply to every caller, not only file input.

use std::collections::BTreeMap;

use crate::config::model::{RawCores, RawInt, TaskRecord};
use crate::errors::{Result, SchedError};
use crate::types::{ResourceSpec, TaskSpec};

impl TaskRecord {
    pub fn into_spec(self, name: String) -> Result<TaskSpec> {
        let cores_required = positive_field(&name, "cores_required", self.cores_required)?;
        let cores_required =
            u32::try_from(cores_required).map_err(|_| SchedError::InvalidTaskSpec {
                task: name.clone(),
                reason: format!("cores_required is out of range (got {cores_required})"),
            })?;
        let execution_time = positive_field(&name, "execution_time", self.execution_time)?;

        Ok(TaskSpec {
            parents: self.parent_names(),
            name,
            cores_required,
            execution_time,
        })
    }
}

fn positive_field(task: &str, key: &str, value: Option<RawInt>) -> Result<u64> {
    let invalid = |reason: String| SchedError::InvalidTaskSpec {
        task: task.to_string(),
        reason,
    };
    match value {
        None => Err(invalid(format!("missing key `{key}`"))),
        Some(RawInt::NotAnInteger(_)) => Err(invalid(format!("{key} is not an integer"))),
        Some(RawInt::Int(n)) => u64::try_from(n)
            .ok()
            .filter(|&v| v > 0)
            .ok_or_else(|| invalid(format!("{key} must be a positive integer (got {n})"))),
    }
}

pub fn task_specs(records: BTreeMap<String, TaskRecord>) -> Result<Vec<TaskSpec>> {
    ensure_named(records.keys(), "task")?;
    records
        .into_iter()
        .map(|(name, record)| record.into_spec(name))
        .collect()
}

pub fn resource_specs(records: BTreeMap<String, RawCores>) -> Result<Vec<ResourceSpec>> {
    ensure_named(records.keys(), "resource")?;
    records
        .into_iter()
        .map(|(name, cores)| {
            let cores_total = match cores {
                RawCores::Count(n) => u32::try_from(n).ok().filter(|&c| c > 0).ok_or_else(|| {
                    SchedError::InvalidResourceSpec {
                        resource: name.clone(),
                        reason: format!("cores count must be a positive integer (got {n})"),
                    }
                })?,
                RawCores::Table(_) => {
                    return Err(SchedError::ConfigError(format!(
                        "resource entry '{name}' is a table; list `<name> = <cores>` pairs \
                         either at the top level or under a single [resource] table"
                    )));
                }
                RawCores::NotAnInteger(_) => {
                    return Err(SchedError::InvalidResourceSpec {
                        resource: name,
                        reason: "cores count is not an integer value".to_string(),
                    });
                }
            };
            Ok(ResourceSpec {
                name,
                cores_total,
            })
        })
        .collect()
}

fn ensure_named<'a>(mut names: impl Iterator<Item = &'a String>, kind: &str) -> Result<()> {
    if names.any(|name| name.trim().is_empty()) {
        return Err(SchedError::ConfigError(format!("{kind} names must not be empty")));
    }
    Ok(())
}
