// src/dag/priority.rs

//! Fixed placement order.

use serde::Serialize;

use crate::dag::graph::TaskGraph;
use crate::dag::task::TaskId;
use crate::types::TaskName;

/// One entry of the priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrioritizedTask {
    pub name: TaskName,
    #[serde(skip)]
    pub id: TaskId,
    pub priority: u64,
    pub full_execution_time: u64,
}

/// Order all tasks by descending priority, ties broken by ascending name.
///
/// Long chains get placed first, and core-heavy tasks get an extra push.
/// The result is computed once and never re-sorted during simulation.
pub fn prioritize(graph: &TaskGraph) -> Vec<PrioritizedTask> {
    let mut order: Vec<PrioritizedTask> = graph
        .tasks()
        .iter()
        .enumerate()
        .map(|(id, task)| {
            let full_execution_time = graph.full_execution_time(id);
            PrioritizedTask {
                name: task.name.clone(),
                id,
                priority: u64::from(task.cores_required).saturating_mul(full_execution_time),
                full_execution_time,
            }
        })
        .collect();

    order.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.name.cmp(&b.name))
    });

    order
}
