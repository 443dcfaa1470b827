//! Driving port for reading a user's tasks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UserId};

use super::TaskPayload;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksRequest {
    pub user_id: UserId,
}

/// Tasks ordered newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksResponse {
    pub tasks: Vec<TaskPayload>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskQuery: Send + Sync {
    async fn list_tasks(&self, request: ListTasksRequest) -> Result<ListTasksResponse, Error>;
}

/// Fixture query returning no tasks.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTaskQuery;

#[async_trait]
impl TaskQuery for FixtureTaskQuery {
    async fn list_tasks(&self, _request: ListTasksRequest) -> Result<ListTasksResponse, Error> {
        Ok(ListTasksResponse { tasks: Vec::new() })
    }
}
