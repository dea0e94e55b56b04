// src/dag/graph.rs

use std::collections::HashMap;

use tracing::debug;

use crate::dag::task::{Task, TaskId};
use crate::errors::{Result, SchedError};
use crate::types::TaskSpec;

/// Index-based dependency graph that owns every task.
///
/// Tasks live in a single `Vec` in input order; parent/child edges are
/// stored on each task as indices into that `Vec`, always added in pairs.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    index: HashMap<String, TaskId>,
}

impl TaskGraph {
    /// Build the graph from task records and wire edges both ways.
    ///
    /// Fails on duplicate names, non-positive cores or duration, and parents
    /// that are not in the task set. Cycles are *not* checked here; see
    /// [`crate::dag::validate`].
    pub fn from_specs(specs: &[TaskSpec]) -> Result<Self> {
        let mut tasks = Vec::with_capacity(specs.len());
        let mut index = HashMap::with_capacity(specs.len());

        // First pass: create nodes.
        for spec in specs {
            check_task_spec(spec)?;
            if index.insert(spec.name.clone(), tasks.len()).is_some() {
                return Err(SchedError::DuplicateTask(spec.name.clone()));
            }
            tasks.push(Task::from_spec(spec));
        }

        // Second pass: link parents <-> children.
        for (child, spec) in specs.iter().enumerate() {
            for parent_name in &spec.parents {
                let parent = *index.get(parent_name).ok_or_else(|| SchedError::UnknownParent {
                    task: spec.name.clone(),
                    parent: parent_name.clone(),
                })?;

                if tasks[child].parents.contains(&parent) {
                    continue;
                }
                tasks[child].parents.push(parent);
                tasks[parent].children.push(child);
            }
        }

        debug!(tasks = tasks.len(), "task graph built");

        Ok(Self { tasks, index })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in input order; the position is the task's [`TaskId`].
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> &Task {
        &self.tasks[id]
    }

    pub fn id_of(&self, name: &str) -> Option<TaskId> {
        self.index.get(name).copied()
    }

    /// Vacuously true for root tasks.
    pub fn parents_done(&self, id: TaskId) -> bool {
        self.tasks[id]
            .parents
            .iter()
            .all(|&p| self.tasks[p].is_done())
    }

    pub fn is_ready(&self, id: TaskId) -> bool {
        !self.tasks[id].is_done() && self.parents_done(id)
    }

    /// Own declared execution time plus that of every distinct ancestor.
    ///
    /// Ancestors reachable along several paths are counted once. The walk is
    /// iterative so wide diamonds stay linear in the number of edges.
    pub fn full_execution_time(&self, id: TaskId) -> u64 {
        let mut visited = vec![false; self.tasks.len()];
        let mut stack = vec![id];
        let mut total: u64 = 0;

        visited[id] = true;
        while let Some(current) = stack.pop() {
            let task = &self.tasks[current];
            total = total.saturating_add(task.execution_time);
            for &parent in &task.parents {
                if !visited[parent] {
                    visited[parent] = true;
                    stack.push(parent);
                }
            }
        }

        total
    }

    /// `cores_required × full_execution_time`.
    pub fn priority(&self, id: TaskId) -> u64 {
        u64::from(self.tasks[id].cores_required).saturating_mul(self.full_execution_time(id))
    }

    /// Advance one task by a tick, but only while it is ready. Returns whether
    /// the task is done afterwards.
    pub(crate) fn advance(&mut self, id: TaskId) -> bool {
        if self.is_ready(id) {
            self.tasks[id].tick();
        }
        self.tasks[id].is_done()
    }
}

fn check_task_spec(spec: &TaskSpec) -> Result<()> {
    if spec.cores_required == 0 {
        return Err(SchedError::InvalidTaskSpec {
            task: spec.name.clone(),
            reason: "cores_required must be a positive integer (got 0)".to_string(),
        });
    }
    if spec.execution_time == 0 {
        return Err(SchedError::InvalidTaskSpec {
            task: spec.name.clone(),
            reason: "execution_time must be a positive integer (got 0)".to_string(),
        });
    }
    Ok(())
}
