// src/dag/readiness.rs

//! Readiness analysis: which tasks can run right now, and in what mode.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::model::{Task, TaskId, TaskStatus};

/// Status snapshot the analyzer reads.
///
/// The single-shot path seeds this from real task statuses; the planner
/// advances its own private copy wave by wave.
pub type StatusMap = HashMap<TaskId, TaskStatus>;

/// Build a status map from the tasks' current statuses.
pub fn status_snapshot(tasks: &[Task]) -> StatusMap {
    tasks.iter().map(|t| (t.id.clone(), t.status)).collect()
}

/// Projection of a task carrying only what planning and formatting need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTask {
    pub id: TaskId,
    pub name: String,
    pub agent: Option<String>,
    pub parallel_reason: Option<String>,
    pub user_count: u32,
}

impl PlannedTask {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            name: task.name.clone(),
            agent: task.agent.clone(),
            parallel_reason: task.parallel_reason.clone(),
            user_count: task.user_count,
        }
    }
}

/// How the chosen runnable set should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Several independent, parallel-eligible tasks; run them concurrently.
    Parallel,
    /// One serial task; run it on its own.
    Single,
    /// Nothing is ready: everything is completed, running, or blocked.
    Idle,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunMode::Parallel => "parallel",
            RunMode::Single => "single",
            RunMode::Idle => "none",
        };
        f.write_str(s)
    }
}

/// The set of tasks chosen to run next.
#[derive(Debug, Clone)]
pub struct RunnableSet {
    /// Chosen tasks, in task-list order. Empty iff `mode` is [`RunMode::Idle`].
    pub tasks: Vec<PlannedTask>,
    pub mode: RunMode,
}

impl RunnableSet {
    /// How many tasks the instruction covers (0 lets the UI disable the
    /// button).
    pub fn runnable_count(&self) -> usize {
        self.tasks.len()
    }
}

/// Compute the runnable set for the given status snapshot.
///
/// A task is ready iff it is pending in the snapshot and every dependency id
/// maps to completed. A dependency id missing from the snapshot never
/// satisfies, so tasks behind a dangling reference stay unready.
///
/// Selection policy: the parallel batch (all ready, parallel-eligible tasks)
/// wins whenever it is non-empty; otherwise the first ready serial task in
/// task-list order is chosen. Repeated calls over the same input never
/// oscillate between equally valid answers.
pub fn analyze_readiness(tasks: &[Task], status: &StatusMap) -> RunnableSet {
    let mut parallel_batch: Vec<&Task> = Vec::new();
    let mut serial: Vec<&Task> = Vec::new();

    for task in tasks {
        if !matches!(status.get(task.id.as_str()), Some(TaskStatus::Pending)) {
            continue;
        }
        if !deps_satisfied(task, status) {
            continue;
        }
        if task.parallel_eligible() {
            parallel_batch.push(task);
        } else {
            serial.push(task);
        }
    }

    if !parallel_batch.is_empty() {
        debug!(count = parallel_batch.len(), "parallel batch selected");
        return RunnableSet {
            tasks: parallel_batch.iter().map(|t| PlannedTask::from_task(t)).collect(),
            mode: RunMode::Parallel,
        };
    }

    if let Some(first) = serial.first() {
        debug!(task = %first.id, "single serial task selected");
        return RunnableSet {
            tasks: vec![PlannedTask::from_task(first)],
            mode: RunMode::Single,
        };
    }

    RunnableSet {
        tasks: Vec::new(),
        mode: RunMode::Idle,
    }
}

/// Check whether every dependency of the given task is completed in the
/// snapshot.
fn deps_satisfied(task: &Task, status: &StatusMap) -> bool {
    for dep in &task.dependencies {
        match status.get(dep.as_str()) {
            Some(TaskStatus::Completed) => {}
            Some(_) => return false,
            None => {
                // Dangling reference: this dependency will never complete.
                debug!(task = %task.id, dep = %dep, "dependency missing from status map");
                return false;
            }
        }
    }
    true
}
