// src/dag/scheduler_step.rs

//! Step-by-step result types for the simulation.

use serde::Serialize;

use crate::dag::priority::PrioritizedTask;
use crate::types::{ResourceName, TaskName};

/// Which half of the simulation a tick belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Some task is still unplaced: place, then advance.
    Placement,
    /// Everything is placed: advance only, until all resources are idle.
    Drain,
}

/// "Task X assigned to resource Y at tick T".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub tick: u64,
    pub task: TaskName,
    pub resource: ResourceName,
}

/// A task that did its last unit of work during `tick` and released its
/// cores at the end of that tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Retirement {
    pub tick: u64,
    pub task: TaskName,
    pub resource: ResourceName,
}

impl Retirement {
    /// Tick count at which the task is finished.
    pub fn finished_at(&self) -> u64 {
        self.tick + 1
    }
}

/// Structured result of a single simulated tick.
///
/// Useful for tests that want to step the simulation by hand and make
/// assertions about what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickStep {
    /// The tick that was just simulated (0-based).
    pub tick: u64,
    pub phase: Phase,
    /// Tasks placed during this tick, in priority order.
    pub placed: Vec<Placement>,
    /// Tasks that finished during this tick.
    pub retired: Vec<Retirement>,
}

/// Complete output of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub priority_order: Vec<PrioritizedTask>,
    pub placements: Vec<Placement>,
    pub retirements: Vec<Retirement>,
    pub makespan: u64,
}

impl Schedule {
    /// Task names in placement priority.
    pub fn priority_names(&self) -> Vec<&str> {
        self.priority_order.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn placement_of(&self, task: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.task == task)
    }

    /// Tick count at which `task` finished.
    pub fn completion_of(&self, task: &str) -> Option<u64> {
        self.retirements
            .iter()
            .find(|r| r.task == task)
            .map(Retirement::finished_at)
    }
}
