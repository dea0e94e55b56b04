// src/types.rs

//! Strongly typed input records consumed by the scheduler core.
//!
//! These are what a loader (or a test) hands to [`crate::dag::Scheduler`].
//! Nothing here is validated yet; validation happens when the scheduler is
//! built.

pub type TaskName = String;
pub type ResourceName = String;

/// One task record: name, core requirement, declared duration and the names
/// of its prerequisite tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub name: TaskName,
    pub cores_required: u32,
    pub execution_time: u64,
    pub parents: Vec<TaskName>,
}

impl TaskSpec {
    pub fn new(name: impl Into<TaskName>, cores_required: u32, execution_time: u64) -> Self {
        Self {
            name: name.into(),
            cores_required,
            execution_time,
            parents: Vec::new(),
        }
    }

    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskName>,
    {
        self.parents.extend(parents.into_iter().map(Into::into));
        self
    }
}

/// One compute resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    pub name: ResourceName,
    pub cores_total: u32,
}

impl ResourceSpec {
    pub fn new(name: impl Into<ResourceName>, cores_total: u32) -> Self {
        Self {
            name: name.into(),
            cores_total,
        }
    }
}

/// A full scheduling problem as read from disk.
#[derive(Debug, Clone, Default)]
pub struct Problem {
    pub tasks: Vec<TaskSpec>,
    pub resources: Vec<ResourceSpec>,
}
