// src/dag/mod.rs

//! Task graph, resources and the tick-driven scheduler.
//!
//! - [`graph`] owns all tasks and their parent/child edges (by index).
//! - [`task`] is the task entity and its public state view.
//! - [`resource`] holds compute resources and the best-fit policy.
//! - [`validate`] rejects cyclic and infeasible inputs.
//! - [`priority`] computes the fixed placement order.
//! - [`scheduler`] runs the simulation.
//! - [`scheduler_step`] defines per-tick and final result types.

pub mod graph;
pub mod priority;
pub mod resource;
pub mod scheduler;
pub mod scheduler_step;
pub mod task;
pub mod validate;

pub use graph::TaskGraph;
pub use priority::{PrioritizedTask, prioritize};
pub use resource::{ComputeResource, best_fit};
pub use scheduler::{Scheduler, Simulation};
pub use scheduler_step::{Phase, Placement, Retirement, Schedule, TickStep};
pub use task::{Task, TaskId, TaskState};
