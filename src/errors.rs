// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

use crate::model::TaskId;

/// Fatal planning errors. Any of these aborts the call with no wave list,
/// since any partial output would violate the dependency guarantee.
///
/// Recoverable validation findings live in [`crate::model::Diagnostic`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The dependency relation contains a cycle; no wave ordering can honour it.
    #[error("cycle detected in task dependency graph: {}", .cycle_ids.join(" -> "))]
    CyclicDependency { cycle_ids: Vec<TaskId> },

    /// Pending tasks remain but none of them can ever become ready.
    ///
    /// Reachable only through dangling dependencies among pending work; a
    /// cycle is rejected before the wave loop starts.
    #[error("scheduling stalled; permanently blocked tasks: {}", .remaining_ids.join(", "))]
    SchedulingStalled { remaining_ids: Vec<TaskId> },
}

pub type Result<T> = std::result::Result<T, PlanError>;
