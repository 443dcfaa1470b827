//! Dashboard and leaderboard services implementing the standings query ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;

use crate::domain::ports::{
    AchievementRepository, DashboardQuery, DashboardRequest, DashboardResponse, IdentityProvider,
    LEADERBOARD_LIMIT_MAX, LeaderboardQuery, LeaderboardRequest, LeaderboardResponse,
    TaskRepository,
};
use crate::domain::service_support::{
    map_achievement_repository_error, map_identity_provider_error, map_task_repository_error,
};
use crate::domain::{
    Error, ScoringPolicy, UserId, compare_standing, compute_dashboard_stats,
    compute_weekly_activity, rank_leaderboard,
};

/// Dashboard read model over tasks and the owner's achievement record.
#[derive(Clone)]
pub struct DashboardService<T, A> {
    task_repo: Arc<T>,
    achievement_repo: Arc<A>,
    clock: Arc<dyn Clock>,
}

impl<T, A> DashboardService<T, A> {
    pub fn new(task_repo: Arc<T>, achievement_repo: Arc<A>, clock: Arc<dyn Clock>) -> Self {
        Self {
            task_repo,
            achievement_repo,
            clock,
        }
    }
}

#[async_trait]
impl<T, A> DashboardQuery for DashboardService<T, A>
where
    T: TaskRepository,
    A: AchievementRepository,
{
    async fn dashboard(&self, request: DashboardRequest) -> Result<DashboardResponse, Error> {
        let tasks = self
            .task_repo
            .list_for_owner(&request.user_id)
            .await
            .map_err(map_task_repository_error)?;
        let record = self
            .achievement_repo
            .find_for_user(&request.user_id)
            .await
            .map_err(map_achievement_repository_error)?;

        Ok(DashboardResponse {
            stats: compute_dashboard_stats(&tasks, record.as_ref()),
            weekly_activity: compute_weekly_activity(&tasks, self.clock.utc().date_naive()),
        })
    }
}

/// Leaderboard read model over every achievement record.
#[derive(Clone)]
pub struct LeaderboardService<A, I> {
    achievement_repo: Arc<A>,
    identities: Arc<I>,
    policy: ScoringPolicy,
}

impl<A, I> LeaderboardService<A, I> {
    pub fn new(achievement_repo: Arc<A>, identities: Arc<I>, policy: ScoringPolicy) -> Self {
        Self {
            achievement_repo,
            identities,
            policy,
        }
    }

    fn resolve_limit(&self, requested: Option<usize>) -> Result<usize, Error> {
        match requested {
            None => Ok(self.policy.leaderboard_limit),
            Some(limit) if (1..=LEADERBOARD_LIMIT_MAX).contains(&limit) => Ok(limit),
            Some(limit) => Err(Error::invalid_request(format!(
                "limit must be between 1 and {LEADERBOARD_LIMIT_MAX}"
            ))
            .with_details(json!({ "field": "limit", "value": limit }))),
        }
    }
}

#[async_trait]
impl<A, I> LeaderboardQuery for LeaderboardService<A, I>
where
    A: AchievementRepository,
    I: IdentityProvider,
{
    async fn leaderboard(
        &self,
        request: LeaderboardRequest,
    ) -> Result<LeaderboardResponse, Error> {
        let limit = self.resolve_limit(request.limit)?;
        let mut records = self
            .achievement_repo
            .list_all()
            .await
            .map_err(map_achievement_repository_error)?;
        if records.is_empty() {
            return Ok(LeaderboardResponse {
                entries: Vec::new(),
            });
        }

        // Only the owners that make the cut are looked up.
        records.sort_by(compare_standing);
        records.truncate(limit);
        let owners: Vec<UserId> = records.iter().map(|record| record.owner().clone()).collect();
        let identities = self
            .identities
            .resolve(&owners)
            .await
            .map_err(map_identity_provider_error)?;

        Ok(LeaderboardResponse {
            entries: rank_leaderboard(&records, &identities, limit),
        })
    }
}

#[cfg(test)]
#[path = "standings_service_tests.rs"]
mod tests;
