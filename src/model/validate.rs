// src/model/validate.rs

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::model::task::{Task, TaskId};

/// Recoverable validation findings.
///
/// These are collected and returned next to a usable result; planning
/// proceeds for the rest of the graph. Fatal conditions (cycles) are errors,
/// see [`crate::errors::PlanError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A task references a dependency id that does not exist in the task
    /// list. The referencing task can never become ready, since a dependency
    /// it needs never completes.
    #[error("task '{task_id}' depends on missing task '{missing_id}'")]
    DanglingDependency { task_id: TaskId, missing_id: TaskId },
}

/// Collect dangling-dependency diagnostics for the given task list.
///
/// Duplicate dependency ids are tolerated (the graph builder drops them);
/// self-references are left to the cycle check, which treats them as a cycle
/// of length one.
pub fn validate_tasks(tasks: &[Task]) -> Vec<Diagnostic> {
    let known: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    let mut diagnostics = Vec::new();

    for task in tasks {
        let mut seen: HashSet<&str> = HashSet::new();
        for dep in &task.dependencies {
            if !seen.insert(dep.as_str()) {
                continue;
            }
            if !known.contains(dep.as_str()) {
                debug!(task = %task.id, missing = %dep, "dangling dependency reference");
                diagnostics.push(Diagnostic::DanglingDependency {
                    task_id: task.id.clone(),
                    missing_id: dep.clone(),
                });
            }
        }
    }

    diagnostics
}
