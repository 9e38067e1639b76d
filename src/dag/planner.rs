// src/dag/planner.rs

//! Multi-wave execution planning over a simulated status map.

use tracing::{debug, warn};

use crate::dag::graph::TaskGraph;
use crate::dag::readiness::{PlannedTask, RunMode, StatusMap, analyze_readiness};
use crate::errors::{PlanError, Result};
use crate::model::{Task, TaskId, TaskStatus};

/// One step of the execution plan: tasks that become ready together and may
/// be executed concurrently by downstream workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wave {
    /// 1-based position in the plan.
    pub index: usize,
    /// Tasks scheduled in this wave, in task-list order.
    pub tasks: Vec<PlannedTask>,
}

/// Generate the full ordered wave plan covering every pending task.
///
/// Refuses outright when the dependency graph has a cycle; returns
/// [`PlanError::SchedulingStalled`] when pending tasks remain that can never
/// become ready (dangling dependencies). No partial plan is returned in
/// either case.
pub fn generate_plan(tasks: &[Task]) -> Result<Vec<Wave>> {
    let (graph, diagnostics) = TaskGraph::build(tasks);

    if let Some(cycle_ids) = graph.find_cycle() {
        warn!(?cycle_ids, "refusing to plan over a cyclic dependency graph");
        return Err(PlanError::CyclicDependency { cycle_ids });
    }

    for diag in &diagnostics {
        warn!(%diag, "validation diagnostic");
    }

    plan_waves(tasks, &graph)
}

/// The wave loop. Precondition: the graph passed the cycle check, so each
/// iteration retires at least one pending task and the loop runs at most N
/// times for N tasks.
fn plan_waves(tasks: &[Task], graph: &TaskGraph) -> Result<Vec<Wave>> {
    // Private simulated copy of the statuses. Work already in progress is
    // treated as finishing before any newly planned wave starts, so its
    // dependents stay plannable; the in-progress tasks themselves are never
    // scheduled again.
    let mut simulated: StatusMap = tasks
        .iter()
        .map(|t| {
            let status = match t.status {
                TaskStatus::InProgress => TaskStatus::Completed,
                other => other,
            };
            (t.id.clone(), status)
        })
        .collect();

    let mut waves: Vec<Wave> = Vec::new();

    loop {
        let runnable = analyze_readiness(tasks, &simulated);

        if runnable.mode == RunMode::Idle {
            let remaining: Vec<TaskId> = tasks
                .iter()
                .filter(|t| matches!(simulated.get(t.id.as_str()), Some(TaskStatus::Pending)))
                .map(|t| t.id.clone())
                .collect();

            if remaining.is_empty() {
                debug!(waves = waves.len(), "all pending tasks planned");
                return Ok(waves);
            }

            for id in &remaining {
                let downstream = graph.transitive_dependents(id);
                warn!(task = %id, ?downstream, "task can never become ready; plan aborted");
            }
            return Err(PlanError::SchedulingStalled {
                remaining_ids: remaining,
            });
        }

        // The parallel batch if non-empty, otherwise the single chosen serial
        // task on its own.
        for planned in &runnable.tasks {
            simulated.insert(planned.id.clone(), TaskStatus::Completed);
        }

        let index = waves.len() + 1;
        debug!(
            wave = index,
            count = runnable.tasks.len(),
            mode = %runnable.mode,
            "wave scheduled"
        );
        waves.push(Wave {
            index,
            tasks: runnable.tasks,
        });
    }
}
