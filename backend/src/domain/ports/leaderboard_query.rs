//! Driving port for the global leaderboard.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, LeaderboardEntry};

/// Upper bound accepted for an explicit leaderboard limit.
pub const LEADERBOARD_LIMIT_MAX: usize = 100;

/// Leaderboard request; `limit` falls back to the scoring policy default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRequest {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardQuery: Send + Sync {
    async fn leaderboard(&self, request: LeaderboardRequest)
    -> Result<LeaderboardResponse, Error>;
}

/// Fixture query returning an empty board.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLeaderboardQuery;

#[async_trait]
impl LeaderboardQuery for FixtureLeaderboardQuery {
    async fn leaderboard(
        &self,
        _request: LeaderboardRequest,
    ) -> Result<LeaderboardResponse, Error> {
        Ok(LeaderboardResponse {
            entries: Vec::new(),
        })
    }
}
