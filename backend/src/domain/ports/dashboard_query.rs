//! Driving port for the per-user dashboard.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{DashboardStats, Error, UserId, WeeklyActivity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub weekly_activity: WeeklyActivity,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    async fn dashboard(&self, request: DashboardRequest) -> Result<DashboardResponse, Error>;
}

/// Fixture query reporting an empty dashboard with no activity buckets.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDashboardQuery;

#[async_trait]
impl DashboardQuery for FixtureDashboardQuery {
    async fn dashboard(&self, _request: DashboardRequest) -> Result<DashboardResponse, Error> {
        Ok(DashboardResponse {
            stats: DashboardStats::default(),
            weekly_activity: WeeklyActivity { days: Vec::new() },
        })
    }
}
