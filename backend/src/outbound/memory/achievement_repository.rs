//! In-memory achievement record store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{AchievementRepository, AchievementRepositoryError};
use crate::domain::{AchievementRecord, UserId};

/// Achievement repository keyed by record owner.
#[derive(Debug, Default)]
pub struct InMemoryAchievementRepository {
    records: Mutex<HashMap<UserId, AchievementRecord>>,
}

impl InMemoryAchievementRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<UserId, AchievementRecord>>, AchievementRepositoryError>
    {
        self.records.lock().map_err(|_| {
            error!("achievement store lock poisoned");
            AchievementRepositoryError::connection("achievement store lock poisoned")
        })
    }
}

#[async_trait]
impl AchievementRepository for InMemoryAchievementRepository {
    async fn find_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<AchievementRecord>, AchievementRepositoryError> {
        Ok(self.store()?.get(user_id).cloned())
    }

    async fn save(&self, record: &AchievementRecord) -> Result<(), AchievementRepositoryError> {
        self.store()?.insert(record.owner().clone(), record.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<AchievementRecord>, AchievementRepositoryError> {
        Ok(self.store()?.values().cloned().collect())
    }
}
