// src/dag/resource.rs

//! Compute resources and the best-fit matching policy.

use tracing::debug;

use crate::dag::graph::TaskGraph;
use crate::dag::task::TaskId;
use crate::errors::{Result, SchedError};
use crate::types::{ResourceName, ResourceSpec};

/// A fixed-capacity pool of cores and the tasks currently running on it.
#[derive(Debug, Clone)]
pub struct ComputeResource {
    pub name: ResourceName,
    pub cores_total: u32,
    cores_in_use: u32,
    tasks_in_progress: Vec<TaskId>,
}

impl ComputeResource {
    pub fn new(name: impl Into<ResourceName>, cores_total: u32) -> Self {
        Self {
            name: name.into(),
            cores_total,
            cores_in_use: 0,
            tasks_in_progress: Vec::new(),
        }
    }

    pub fn cores_in_use(&self) -> u32 {
        self.cores_in_use
    }

    pub fn cores_available(&self) -> u32 {
        self.cores_total - self.cores_in_use
    }

    pub fn tasks_in_progress(&self) -> &[TaskId] {
        &self.tasks_in_progress
    }

    pub fn task_count(&self) -> usize {
        self.tasks_in_progress.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks_in_progress.is_empty()
    }

    /// Accept a task if it fits in the cores currently free.
    ///
    /// Returns `false` (and changes nothing) when it does not.
    pub fn try_assign(&mut self, task: TaskId, cores_required: u32) -> bool {
        if cores_required > self.cores_available() {
            return false;
        }
        self.tasks_in_progress.push(task);
        self.cores_in_use += cores_required;
        true
    }

    /// Advance every in-progress task by one tick and release the cores of
    /// those that finished. Returns the retired tasks in assignment order.
    pub(crate) fn advance(&mut self, graph: &mut TaskGraph) -> Vec<TaskId> {
        let mut retired = Vec::new();

        for &id in &self.tasks_in_progress {
            if graph.advance(id) {
                retired.push(id);
            }
        }

        if !retired.is_empty() {
            self.tasks_in_progress.retain(|id| !retired.contains(id));
            for &id in &retired {
                self.cores_in_use -= graph.task(id).cores_required;
                debug!(
                    resource = %self.name,
                    task = %graph.task(id).name,
                    cores_in_use = self.cores_in_use,
                    "task finished; cores released"
                );
            }
        }

        retired
    }
}

/// Build resources from records, sorted by name.
///
/// A zero core count is rejected with `InvalidResourceSpec`.
pub fn resources_from_specs(specs: &[ResourceSpec]) -> Result<Vec<ComputeResource>> {
    let mut sorted: Vec<&ResourceSpec> = specs.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    for pair in sorted.windows(2) {
        if pair[0].name == pair[1].name {
            return Err(SchedError::DuplicateResource(pair[0].name.clone()));
        }
    }

    sorted
        .into_iter()
        .map(|spec| {
            if spec.cores_total == 0 {
                return Err(SchedError::InvalidResourceSpec {
                    resource: spec.name.clone(),
                    reason: "cores count must be a positive integer (got 0)".to_string(),
                });
            }
            Ok(ComputeResource::new(spec.name.clone(), spec.cores_total))
        })
        .collect()
}

/// Best-fit: the resource with the fewest available cores that still covers
/// `cores_required`. Ties go to the lexicographically smallest name.
///
/// Returns the resource's position in `resources`, or `None` if nothing fits
/// right now.
pub fn best_fit(resources: &[ComputeResource], cores_required: u32) -> Option<usize> {
    resources
        .iter()
        .enumerate()
        .filter(|(_, r)| r.cores_available() >= cores_required)
        .min_by(|(_, a), (_, b)| {
            a.cores_available()
                .cmp(&b.cores_available())
                .then_with(|| a.name.cmp(&b.name))
        })
        .map(|(idx, _)| idx)
}
