//! Port for task persistence.

use async_trait::async_trait;

use crate::domain::{Task, TaskId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by task repository adapters.
    pub enum TaskRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "task repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "task repository query failed: {message}",
    }
}

/// Port for storing and loading tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find a task by id regardless of owner.
    async fn find_by_id(&self, task_id: &TaskId) -> Result<Option<Task>, TaskRepositoryError>;

    /// List every task owned by `owner`, in no particular order.
    async fn list_for_owner(&self, owner: &UserId) -> Result<Vec<Task>, TaskRepositoryError>;

    /// Insert or replace a task.
    async fn save(&self, task: &Task) -> Result<(), TaskRepositoryError>;

    /// Delete a task.
    ///
    /// Returns `true` when a task was removed and `false` when none existed.
    async fn delete(&self, task_id: &TaskId) -> Result<bool, TaskRepositoryError>;
}

/// Fixture implementation for tests that do not exercise task persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTaskRepository;

#[async_trait]
impl TaskRepository for FixtureTaskRepository {
    async fn find_by_id(&self, _task_id: &TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        Ok(None)
    }

    async fn list_for_owner(&self, _owner: &UserId) -> Result<Vec<Task>, TaskRepositoryError> {
        Ok(Vec::new())
    }

    async fn save(&self, _task: &Task) -> Result<(), TaskRepositoryError> {
        Ok(())
    }

    async fn delete(&self, _task_id: &TaskId) -> Result<bool, TaskRepositoryError> {
        Ok(false)
    }
}
