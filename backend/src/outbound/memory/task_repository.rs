//! In-memory task store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{Task, TaskId, UserId};

/// Task repository holding every task in a single map keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: Mutex<HashMap<TaskId, Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> Result<MutexGuard<'_, HashMap<TaskId, Task>>, TaskRepositoryError> {
        self.tasks.lock().map_err(|_| {
            error!("task store lock poisoned");
            TaskRepositoryError::connection("task store lock poisoned")
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, task_id: &TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        Ok(self.store()?.get(task_id).cloned())
    }

    async fn list_for_owner(&self, owner: &UserId) -> Result<Vec<Task>, TaskRepositoryError> {
        Ok(self
            .store()?
            .values()
            .filter(|task| task.owner() == owner)
            .cloned()
            .collect())
    }

    async fn save(&self, task: &Task) -> Result<(), TaskRepositoryError> {
        self.store()?.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, task_id: &TaskId) -> Result<bool, TaskRepositoryError> {
        Ok(self.store()?.remove(task_id).is_some())
    }
}
