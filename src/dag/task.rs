// src/dag/task.rs

//! Task entity and its public state view.

use serde::Serialize;

use crate::types::{TaskName, TaskSpec};

/// Index of a task inside its [`crate::dag::TaskGraph`].
pub type TaskId = usize;

/// A unit of work inside the graph.
///
/// Edges are stored as indices into the owning graph, so parent/child
/// back-references never form ownership cycles.
#[derive(Debug, Clone)]
pub struct Task {
    pub name: TaskName,
    pub cores_required: u32,
    /// Declared duration; never changes.
    pub execution_time: u64,
    /// Ticks of work left. Only the advance step decrements this.
    pub remaining_time: u64,
    pub(crate) parents: Vec<TaskId>,
    pub(crate) children: Vec<TaskId>,
}

impl Task {
    pub(crate) fn from_spec(spec: &TaskSpec) -> Self {
        Self {
            name: spec.name.clone(),
            cores_required: spec.cores_required,
            execution_time: spec.execution_time,
            remaining_time: spec.execution_time,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn parents(&self) -> &[TaskId] {
        &self.parents
    }

    pub fn children(&self) -> &[TaskId] {
        &self.children
    }

    pub fn is_done(&self) -> bool {
        self.remaining_time == 0
    }

    /// Burn one tick of work. Saturates at zero.
    pub(crate) fn tick(&mut self) {
        self.remaining_time = self.remaining_time.saturating_sub(1);
    }
}

/// Read-only view of where a task is in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// Not placed yet and waiting on at least one parent.
    Pending,
    /// Not placed yet; every parent is done.
    Ready,
    /// Placed on a resource with work left.
    Running,
    Done,
}
