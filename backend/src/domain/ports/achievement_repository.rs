//! Port for achievement record persistence.
//!
//! Records are keyed by owner. A missing record is not an error: callers
//! treat it as a zero-initialised record.

use async_trait::async_trait;

use crate::domain::{AchievementRecord, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by achievement repository adapters.
    pub enum AchievementRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "achievement repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "achievement repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Load the record owned by `user_id`, if one exists.
    async fn find_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<AchievementRecord>, AchievementRepositoryError>;

    /// Insert or replace a record.
    async fn save(&self, record: &AchievementRecord) -> Result<(), AchievementRepositoryError>;

    /// Every stored record, used to build the leaderboard.
    async fn list_all(&self) -> Result<Vec<AchievementRecord>, AchievementRepositoryError>;
}

/// Fixture implementation with no stored records.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAchievementRepository;

#[async_trait]
impl AchievementRepository for FixtureAchievementRepository {
    async fn find_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<AchievementRecord>, AchievementRepositoryError> {
        Ok(None)
    }

    async fn save(&self, _record: &AchievementRecord) -> Result<(), AchievementRepositoryError> {
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<AchievementRecord>, AchievementRepositoryError> {
        Ok(Vec::new())
    }
}
