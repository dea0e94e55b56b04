// src/dag/scheduler.rs

use tracing::{debug, info, warn};

use crate::dag::graph::TaskGraph;
use crate::dag::priority::{PrioritizedTask, prioritize};
use crate::dag::resource::{ComputeResource, best_fit, resources_from_specs};
use crate::dag::scheduler_step::{Phase, Placement, Retirement, Schedule, TickStep};
use crate::dag::task::{TaskId, TaskState};
use crate::dag::validate::validate;
use crate::errors::Result;
use crate::types::{Problem, ResourceSpec, TaskSpec};

/// Scheduler holds a validated task graph, the resource pool and the fixed
/// priority order.
///
/// It is a session object: nothing here is global, and [`Scheduler::simulate`]
/// never mutates it, so the same scheduler can be simulated any number of
/// times with identical results.
#[derive(Debug, Clone)]
pub struct Scheduler {
    graph: TaskGraph,
    resources: Vec<ComputeResource>,
    order: Vec<PrioritizedTask>,
}

impl Scheduler {
    /// Build and fully validate a scheduler.
    ///
    /// Checks run in this order: resource records, task records, parent
    /// references, cycles, feasibility. Nothing is simulated on failure.
    pub fn new(tasks: &[TaskSpec], resources: &[ResourceSpec]) -> Result<Self> {
        let resources = resources_from_specs(resources)?;
        let graph = TaskGraph::from_specs(tasks)?;
        validate(&graph, &resources)?;

        let order = prioritize(&graph);
        info!(
            tasks = graph.len(),
            resources = resources.len(),
            "scheduler: input validated"
        );
        debug!(
            order = ?order.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            "scheduler: priority order computed"
        );

        Ok(Self {
            graph,
            resources,
            order,
        })
    }

    pub fn from_problem(problem: &Problem) -> Result<Self> {
        Self::new(&problem.tasks, &problem.resources)
    }

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    /// Resources sorted by name.
    pub fn resources(&self) -> &[ComputeResource] {
        &self.resources
    }

    pub fn priority_order(&self) -> &[PrioritizedTask] {
        &self.order
    }

    /// Fresh simulation over a copy of the graph and resources.
    pub fn simulation(&self) -> Simulation {
        Simulation::new(
            self.graph.clone(),
            self.resources.clone(),
            self.order.clone(),
        )
    }

    /// Run the simulation to completion.
    pub fn simulate(&self) -> Schedule {
        self.simulation().finish()
    }
}

/// Mutable per-run state: task progress, resource occupancy and the tick
/// counter.
#[derive(Debug, Clone)]
pub struct Simulation {
    graph: TaskGraph,
    resources: Vec<ComputeResource>,
    order: Vec<PrioritizedTask>,
    /// Not yet placed, in priority order.
    unplaced: Vec<TaskId>,
    placed: Vec<bool>,
    tick: u64,
    placements: Vec<Placement>,
    retirements: Vec<Retirement>,
}

impl Simulation {
    fn new(graph: TaskGraph, resources: Vec<ComputeResource>, order: Vec<PrioritizedTask>) -> Self {
        let unplaced = order.iter().map(|p| p.id).collect();
        let placed = vec![false; graph.len()];
        Self {
            graph,
            resources,
            order,
            unplaced,
            placed,
            tick: 0,
            placements: Vec::new(),
            retirements: Vec::new(),
        }
    }

    /// Number of ticks simulated so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    pub fn resources(&self) -> &[ComputeResource] {
        &self.resources
    }

    /// Phase the *next* tick will run in, or `None` once finished.
    pub fn phase(&self) -> Option<Phase> {
        if !self.unplaced.is_empty() {
            Some(Phase::Placement)
        } else if self.resources.iter().any(|r| !r.is_idle()) {
            Some(Phase::Drain)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase().is_none()
    }

    pub fn state_of(&self, task: &str) -> Option<TaskState> {
        let id = self.graph.id_of(task)?;
        let state = if self.graph.task(id).is_done() {
            TaskState::Done
        } else if self.placed[id] {
            TaskState::Running
        } else if self.graph.parents_done(id) {
            TaskState::Ready
        } else {
            TaskState::Pending
        };
        Some(state)
    }

    /// Simulate one tick. Returns `None` if there was nothing left to do.
    ///
    /// Placement uses only the capacity free at the start of the tick; cores
    /// released by this tick's advance are available from the next tick on.
    pub fn step(&mut self) -> Option<TickStep> {
        let phase = self.phase()?;
        let tick = self.tick;

        let placed = match phase {
            Phase::Placement => self.place_ready_tasks(),
            Phase::Drain => Vec::new(),
        };
        debug_assert!(
            self.resources.iter().any(|r| !r.is_idle()),
            "tick {tick} has unplaced tasks but nothing running"
        );
        let retired = self.advance_resources();

        self.tick += 1;

        Some(TickStep {
            tick,
            phase,
            placed,
            retired,
        })
    }

    /// Run until every task is placed and every resource is idle.
    pub fn finish(mut self) -> Schedule {
        while self.step().is_some() {}

        info!(makespan = self.tick, "schedule makespan computed");

        Schedule {
            priority_order: self.order,
            placements: self.placements,
            retirements: self.retirements,
            makespan: self.tick,
        }
    }

    fn place_ready_tasks(&mut self) -> Vec<Placement> {
        let mut placed = Vec::new();
        let mut still_unplaced = Vec::with_capacity(self.unplaced.len());

        for id in std::mem::take(&mut self.unplaced) {
            if !self.graph.is_ready(id) {
                still_unplaced.push(id);
                continue;
            }

            let cores = self.graph.task(id).cores_required;
            let Some(idx) = best_fit(&self.resources, cores) else {
                // No capacity this tick; retry next tick at the same position.
                still_unplaced.push(id);
                continue;
            };

            let resource = &mut self.resources[idx];
            if !resource.try_assign(id, cores) {
                warn!(
                    task = %self.graph.task(id).name,
                    resource = %resource.name,
                    tick = self.tick,
                    "resource rejected task; retrying next tick"
                );
                still_unplaced.push(id);
                continue;
            }

            info!(
                task = %self.graph.task(id).name,
                resource = %resource.name,
                tick = self.tick,
                "task assigned to resource"
            );
            self.placed[id] = true;
            let placement = Placement {
                tick: self.tick,
                task: self.graph.task(id).name.clone(),
                resource: resource.name.clone(),
            };
            self.placements.push(placement.clone());
            placed.push(placement);
        }

        self.unplaced = still_unplaced;
        placed
    }

    fn advance_resources(&mut self) -> Vec<Retirement> {
        let mut retired = Vec::new();

        for resource in self.resources.iter_mut() {
            for id in resource.advance(&mut self.graph) {
                let retirement = Retirement {
                    tick: self.tick,
                    task: self.graph.task(id).name.clone(),
                    resource: resource.name.clone(),
                };
                self.retirements.push(retirement.clone());
                retired.push(retirement);
            }
        }

        retired
    }
}
