// src/format.rs

//! Instruction text for runnable sets and wave plans.
//!
//! Pure string construction; placing the text on a clipboard is the
//! caller's job (see [`crate::clipboard`]).

use crate::dag::planner::Wave;
use crate::dag::readiness::{PlannedTask, RunMode, RunnableSet};

/// Agent label used when a task has no assignee.
const DEFAULT_AGENT: &str = "unassigned";

/// Reason shown for serial tasks that carry no explanation of their own.
const DEFAULT_SERIAL_REASON: &str = "not marked safe for concurrent work";

/// Render the single-shot instruction for a runnable set.
pub fn format_runnable(runnable: &RunnableSet) -> String {
    let mut out = String::new();

    match runnable.mode {
        RunMode::Parallel => {
            let count = runnable.tasks.len();
            let noun = if count == 1 { "task" } else { "tasks" };
            out.push_str(&format!("Run {count} {noun} in parallel:\n"));
            for task in &runnable.tasks {
                out.push_str(&task_line(task));
                out.push_str(" — run in parallel\n");
            }
        }
        RunMode::Single => {
            // Exactly one task by construction.
            for task in &runnable.tasks {
                out.push_str(&task_line(task));
                out.push_str(&format!(" — run sequentially ({})\n", serial_reason(task)));
            }
        }
        RunMode::Idle => {
            out.push_str("No runnable tasks: all tasks complete or blocked.\n");
        }
    }

    out
}

/// Render the full multi-wave plan.
pub fn format_plan(waves: &[Wave]) -> String {
    if waves.is_empty() {
        return String::from("Nothing to plan: all tasks are already complete.\n");
    }

    let mut out = String::new();

    for wave in waves {
        out.push_str(&format!("Wave {} ({}):\n", wave.index, wave_annotation(wave)));
        for task in &wave.tasks {
            out.push_str("  ");
            out.push_str(&task_line(task));
            out.push('\n');
        }
    }

    out
}

fn task_line(task: &PlannedTask) -> String {
    let agent = task.agent.as_deref().unwrap_or(DEFAULT_AGENT);
    format!("Task `{}` (agent: {})", task.id, agent)
}

fn serial_reason(task: &PlannedTask) -> &str {
    match task.parallel_reason.as_deref() {
        Some(reason) if !reason.trim().is_empty() => reason,
        _ => DEFAULT_SERIAL_REASON,
    }
}

fn wave_annotation(wave: &Wave) -> String {
    if wave.tasks.len() == 1 {
        String::from("sequential")
    } else {
        let workers: u32 = wave.tasks.iter().map(|t| t.user_count).sum();
        format!("parallel — {workers} workers")
    }
}
