//! Task entities and their validation rules.
//!
//! A task belongs to exactly one user. Its completion state is the input the
//! scoring engine reacts to; `completed_at` is present exactly when the task
//! is completed.

use std::fmt;

mod task;
#[cfg(test)]
mod tests;

pub use task::{Task, TaskDraft, TaskId};

/// Maximum accepted title length, in characters.
pub const TASK_TITLE_MAX: usize = 200;

/// Validation errors raised by task constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    TitleTooLong { max: usize },
    CompletedWithoutTimestamp,
    TimestampWithoutCompletion,
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be blank"),
            Self::TitleTooLong { max } => {
                write!(f, "task title must be at most {max} characters")
            }
            Self::CompletedWithoutTimestamp => {
                write!(f, "completed task requires completed_at")
            }
            Self::TimestampWithoutCompletion => {
                write!(f, "pending task must not carry completed_at")
            }
        }
    }
}

impl std::error::Error for TaskValidationError {}
