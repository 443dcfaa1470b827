//! Identity registration service implementing the identity command port.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    IdentityCommand, IdentityPayload, IdentityProvider, UpdateIdentityRequest,
};
use crate::domain::service_support::map_identity_provider_error;
use crate::domain::{Error, UserIdentity};

/// Validates identities and records them with the identity provider.
#[derive(Clone)]
pub struct IdentityService<I> {
    identities: Arc<I>,
}

impl<I> IdentityService<I> {
    pub fn new(identities: Arc<I>) -> Self {
        Self { identities }
    }
}

#[async_trait]
impl<I> IdentityCommand for IdentityService<I>
where
    I: IdentityProvider,
{
    async fn update_identity(
        &self,
        request: UpdateIdentityRequest,
    ) -> Result<IdentityPayload, Error> {
        let UpdateIdentityRequest {
            user_id,
            full_name,
            email,
        } = request;
        let identity = UserIdentity::new(full_name, email).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "email" }))
        })?;

        self.identities
            .save(&user_id, &identity)
            .await
            .map_err(map_identity_provider_error)?;
        info!(user_id = %user_id, "identity updated");

        Ok(IdentityPayload::new(user_id, &identity))
    }
}
