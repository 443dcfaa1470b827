//! Driving port for registering how a user appears on the leaderboard.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UserId, UserIdentity};

/// Raw identity fields; validation happens in the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIdentityRequest {
    pub user_id: UserId,
    pub full_name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityPayload {
    pub user_id: UserId,
    pub full_name: Option<String>,
    pub email: String,
    pub display_name: String,
    pub avatar_initial: char,
}

impl IdentityPayload {
    pub fn new(user_id: UserId, identity: &UserIdentity) -> Self {
        Self {
            user_id,
            full_name: identity.full_name().map(str::to_owned),
            email: identity.email().to_owned(),
            display_name: identity.display_name().to_owned(),
            avatar_initial: identity.avatar_initial(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityCommand: Send + Sync {
    async fn update_identity(&self, request: UpdateIdentityRequest)
    -> Result<IdentityPayload, Error>;
}

/// Fixture command echoing the validated identity without storing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityCommand;

#[async_trait]
impl IdentityCommand for FixtureIdentityCommand {
    async fn update_identity(
        &self,
        request: UpdateIdentityRequest,
    ) -> Result<IdentityPayload, Error> {
        let identity = UserIdentity::new(request.full_name, request.email)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        Ok(IdentityPayload::new(request.user_id, &identity))
    }
}
