#![allow(dead_code)]

use coresched::dag::Scheduler;
use coresched::errors::Result;
use coresched::types::{Problem, ResourceSpec, TaskSpec};

/// Builder for a [`Problem`] to simplify test setup.
pub struct ProblemBuilder {
    problem: Problem,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self {
            problem: Problem::default(),
        }
    }

    pub fn with_task(mut self, task: TaskSpec) -> Self {
        self.problem.tasks.push(task);
        self
    }

    pub fn with_resource(mut self, name: &str, cores_total: u32) -> Self {
        self.problem
            .resources
            .push(ResourceSpec::new(name, cores_total));
        self
    }

    pub fn build(self) -> Problem {
        self.problem
    }

    /// Build and validate a scheduler; panics on invalid input.
    pub fn scheduler(self) -> Scheduler {
        self.try_scheduler()
            .expect("Failed to build valid scheduler from builder")
    }

    pub fn try_scheduler(self) -> Result<Scheduler> {
        Scheduler::from_problem(&self.problem)
    }
}

impl Default for ProblemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`TaskSpec`].
pub struct TaskBuilder {
    task: TaskSpec,
}

impl TaskBuilder {
    pub fn new(name: &str, cores_required: u32, execution_time: u64) -> Self {
        Self {
            task: TaskSpec::new(name, cores_required, execution_time),
        }
    }

    pub fn after(mut self, parent: &str) -> Self {
        self.task.parents.push(parent.to_string());
        self
    }

    pub fn build(self) -> TaskSpec {
        self.task
    }
}

/// Shorthand for `TaskBuilder::new(..).after(..)...build()`.
pub fn task(name: &str, cores_required: u32, execution_time: u64, parents: &[&str]) -> TaskSpec {
    parents
        .iter()
        .fold(TaskBuilder::new(name, cores_required, execution_time), |b, p| b.after(p))
        .build()
}
