// src/dag/validate.rs

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::dag::graph::TaskGraph;
use crate::dag::resource::ComputeResource;
use crate::errors::{Result, SchedError};

/// Run every pre-simulation check that needs the full graph.
pub fn validate(graph: &TaskGraph, resources: &[ComputeResource]) -> Result<()> {
    check_acyclic(graph)?;
    check_feasible(graph, resources)?;
    Ok(())
}

/// Reject any graph where following child edges can lead back to the start.
///
/// Edge direction: parent -> child. A topological sort fails exactly when a
/// cycle (including a self-parent) exists.
pub fn check_acyclic(graph: &TaskGraph) -> Result<()> {
    let mut g: DiGraph<(), ()> = DiGraph::with_capacity(graph.len(), 0);
    let nodes: Vec<NodeIndex> = (0..graph.len()).map(|_| g.add_node(())).collect();

    for (id, task) in graph.tasks().iter().enumerate() {
        for &child in task.children() {
            g.add_edge(nodes[id], nodes[child], ());
        }
    }

    match toposort(&g, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(SchedError::CircularDependency {
            task: graph.task(cycle.node_id().index()).name.clone(),
        }),
    }
}

/// Every task must fit on at least one resource when that resource is idle.
///
/// Summed capacity across resources does not count: a task never spans
/// resources.
pub fn check_feasible(graph: &TaskGraph, resources: &[ComputeResource]) -> Result<()> {
    let largest = resources.iter().map(|r| r.cores_total).max().unwrap_or(0);

    match graph.tasks().iter().find(|t| t.cores_required > largest) {
        Some(task) => Err(SchedError::UnschedulableTask {
            task: task.name.clone(),
            cores_required: task.cores_required,
        }),
        None => Ok(()),
    }
}
