//! Identity HTTP handler.
//!
//! ```text
//! PUT /api/v1/users/{user_id}/identity
//! ```

use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{IdentityPayload, UpdateIdentityRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{USER_ID, parse_user_id};

/// Name and email shown for a user on the leaderboard.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIdentityRequestBody {
    #[schema(example = "Ada Lovelace")]
    pub full_name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponseBody {
    pub user_id: String,
    pub full_name: Option<String>,
    pub email: String,
    /// Full name when present, otherwise the email.
    pub display_name: String,
    #[schema(example = "A")]
    pub avatar_initial: String,
}

impl From<IdentityPayload> for IdentityResponseBody {
    fn from(value: IdentityPayload) -> Self {
        Self {
            user_id: value.user_id.to_string(),
            full_name: value.full_name,
            email: value.email,
            display_name: value.display_name,
            avatar_initial: value.avatar_initial.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IdentityPath {
    user_id: String,
}

/// Create or replace the display identity of a user.
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/identity",
    params(("user_id" = String, Path, description = "User whose identity is set")),
    request_body = UpdateIdentityRequestBody,
    responses(
        (status = 200, description = "Identity stored", body = IdentityResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["identities"],
    operation_id = "updateIdentity"
)]
#[put("/users/{user_id}/identity")]
pub async fn update_identity(
    state: web::Data<HttpState>,
    path: web::Path<IdentityPath>,
    payload: web::Json<UpdateIdentityRequestBody>,
) -> ApiResult<web::Json<IdentityResponseBody>> {
    let user_id = parse_user_id(&path.into_inner().user_id, USER_ID)?;
    let UpdateIdentityRequestBody { full_name, email } = payload.into_inner();
    let response = state
        .identities
        .update_identity(UpdateIdentityRequest {
            user_id,
            full_name,
            email,
        })
        .await?;

    Ok(web::Json(response.into()))
}
