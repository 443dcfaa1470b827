//! In-memory user identity directory.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{IdentityProvider, IdentityProviderError};
use crate::domain::{UserId, UserIdentity};

/// Identity provider fed by explicit registrations.
#[derive(Debug, Default)]
pub struct InMemoryIdentityDirectory {
    identities: RwLock<HashMap<UserId, UserIdentity>>,
}

impl InMemoryIdentityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or replace the identity shown for `user_id`.
    pub fn register(
        &self,
        user_id: UserId,
        identity: UserIdentity,
    ) -> Result<(), IdentityProviderError> {
        let mut identities = self.identities.write().map_err(|_| {
            error!("identity directory lock poisoned");
            IdentityProviderError::connection("identity directory lock poisoned")
        })?;
        identities.insert(user_id, identity);
        Ok(())
    }

    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, HashMap<UserId, UserIdentity>>, IdentityProviderError> {
        self.identities.read().map_err(|_| {
            error!("identity directory lock poisoned");
            IdentityProviderError::connection("identity directory lock poisoned")
        })
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityDirectory {
    async fn resolve(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, UserIdentity>, IdentityProviderError> {
        let identities = self.read()?;
        Ok(user_ids
            .iter()
            .filter_map(|id| {
                identities
                    .get(id)
                    .map(|identity| (id.clone(), identity.clone()))
            })
            .collect())
    }

    async fn save(
        &self,
        user_id: &UserId,
        identity: &UserIdentity,
    ) -> Result<(), IdentityProviderError> {
        self.register(user_id.clone(), identity.clone())
    }
}
