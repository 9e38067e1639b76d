// src/model/mod.rs

//! Input model for the planner: task records and their validation.

pub mod task;
pub mod validate;

pub use task::{Task, TaskId, TaskStatus};
pub use validate::{Diagnostic, validate_tasks};
