// src/lib.rs

//! `taskwave` plans dependency-ordered execution for a flat task list: it
//! decides what is runnable right now, batches parallel-safe work, and
//! unrolls the whole backlog into ordered waves, with agent-readable
//! instruction text for both.
//!
//! Two entry points map to the dashboard's two buttons:
//! - [`next_runnable`] is the single-shot "Execute" path
//! - [`plan_all`] is the full-plan "Optimize All" path
//!
//! Both are pure, synchronous and re-entrant: the library never mutates
//! caller-owned task state and holds no state of its own between calls.

pub mod clipboard;
pub mod dag;
pub mod errors;
pub mod format;
pub mod logging;
pub mod model;

use tracing::{debug, warn};

use crate::dag::{RunMode, TaskGraph, Wave, analyze_readiness, generate_plan, status_snapshot};
use crate::errors::Result;
use crate::format::{format_plan, format_runnable};
use crate::model::{Diagnostic, Task};

/// Result of the single-shot "Execute" path.
#[derive(Debug, Clone)]
pub struct RunnableSummary {
    /// Instruction text for the chosen runnable set.
    pub text: String,
    /// How many tasks the instruction covers (0 lets the UI disable the
    /// button).
    pub runnable_count: usize,
    pub mode: RunMode,
    /// Recoverable validation findings (dangling dependencies).
    pub diagnostics: Vec<Diagnostic>,
}

/// Single-shot analysis: what should run next, right now.
///
/// Never fails: a cyclic or dangling-blocked graph simply leaves the affected
/// tasks unready, and an empty runnable set is reported as
/// [`RunMode::Idle`], not as an error.
pub fn next_runnable(tasks: &[Task]) -> RunnableSummary {
    let (graph, diagnostics) = TaskGraph::build(tasks);

    if let Some(cycle_ids) = graph.find_cycle() {
        warn!(?cycle_ids, "task graph contains a cycle; its tasks can never run");
    }

    let status = status_snapshot(tasks);
    let runnable = analyze_readiness(tasks, &status);

    debug!(
        mode = %runnable.mode,
        count = runnable.runnable_count(),
        "single-shot analysis"
    );

    RunnableSummary {
        text: format_runnable(&runnable),
        runnable_count: runnable.runnable_count(),
        mode: runnable.mode,
        diagnostics,
    }
}

/// Result of the "Optimize All" path: formatted plan text plus the structured
/// waves for callers that render rather than copy.
#[derive(Debug, Clone)]
pub struct PlanSummary {
    pub text: String,
    pub waves: Vec<Wave>,
}

/// Full-plan generation: every pending task, ordered into waves.
///
/// Fails with [`errors::PlanError::CyclicDependency`] on a cyclic graph and
/// [`errors::PlanError::SchedulingStalled`] when pending tasks can never
/// become ready; no partial plan is returned in either case.
pub fn plan_all(tasks: &[Task]) -> Result<PlanSummary> {
    let waves = generate_plan(tasks)?;
    let text = format_plan(&waves);
    Ok(PlanSummary { text, waves })
}
