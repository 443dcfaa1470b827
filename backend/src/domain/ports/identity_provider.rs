//! Port storing and resolving display identities for users.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{UserId, UserIdentity};

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity provider adapters.
    pub enum IdentityProviderError {
        /// Directory could not be reached.
        Connection { message: String } => "identity provider connection failed: {message}",
        /// Lookup failed during execution.
        Query { message: String } => "identity provider query failed: {message}",
    }
}

/// Looks up display identities in bulk and records new ones.
///
/// Unknown users are simply absent from the returned map.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, UserIdentity>, IdentityProviderError>;

    /// Insert or replace the identity of `user_id`.
    async fn save(
        &self,
        user_id: &UserId,
        identity: &UserIdentity,
    ) -> Result<(), IdentityProviderError>;
}

/// Fixture provider that knows nobody and forgets what it is told.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityProvider;

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    async fn resolve(
        &self,
        _user_ids: &[UserId],
    ) -> Result<HashMap<UserId, UserIdentity>, IdentityProviderError> {
        Ok(HashMap::new())
    }

    async fn save(
        &self,
        _user_id: &UserId,
        _identity: &UserIdentity,
    ) -> Result<(), IdentityProviderError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_resolves_nobody() {
        let resolved = FixtureIdentityProvider
            .resolve(&[UserId::random()])
            .await
            .expect("fixture resolve succeeds");
        assert!(resolved.is_empty());
    }
}
