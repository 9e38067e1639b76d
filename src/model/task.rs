// src/model/task.rs

use serde::Deserialize;

/// Opaque task identifier as issued by the task store. Stable across calls.
pub type TaskId = String;

/// Lifecycle status of a task.
///
/// This is a closed set; any other value in the input is a deserialization
/// error, not a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// One unit of work as delivered by the task store.
///
/// Field names mirror the store's camelCase JSON:
///
/// ```json
/// {
///   "id": "42",
///   "name": "Migrate settings schema",
///   "status": "pending",
///   "dependencies": ["17"],
///   "multiDevOK": true,
///   "userCount": 2
/// }
/// ```
///
/// Everything past `status` is optional and defaults sensibly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,

    /// Display label.
    pub name: String,

    pub status: TaskStatus,

    /// Ids of tasks this one is blocked on. Duplicates are tolerated and
    /// deduplicated when the graph is built.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,

    /// A human has judged this task safe to run alongside others.
    #[serde(default, rename = "multiDevOK")]
    pub multi_dev_ok: bool,

    /// Automated analysis judged this task structurally independent of its
    /// sibling tasks.
    #[serde(default)]
    pub is_parallelizable: bool,

    /// Free-text explanation for the parallel judgement, if any.
    #[serde(default)]
    pub parallel_reason: Option<String>,

    /// Number of concurrent workers this task could usefully absorb when run
    /// in parallel. At least 1.
    #[serde(default = "default_user_count")]
    pub user_count: u32,

    /// Optional assignee label, used only for formatting.
    #[serde(default)]
    pub agent: Option<String>,
}

fn default_user_count() -> u32 {
    1
}

impl Task {
    /// The single parallel-safety flag the scheduler consults: either a human
    /// (`multiDevOK`) or automated analysis (`isParallelizable`) has cleared
    /// this task for concurrent work.
    pub fn parallel_eligible(&self) -> bool {
        self.multi_dev_ok || self.is_parallelizable
    }
}
