//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The task belongs to another user.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with the current resource state.
    #[schema(rename = "conflict")]
    Conflict,
    /// A backing store or identity provider is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "limit must be between 1 and 100")]
    message: String,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::PodiumTier`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PodiumTier)]
pub enum PodiumTierSchema {
    #[schema(rename = "gold")]
    Gold,
    #[schema(rename = "silver")]
    Silver,
    #[schema(rename = "bronze")]
    Bronze,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_has_expected_name() {
        let schema_json = schema_to_json::<ErrorSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("message"));
        assert!(schema_json.contains("details"));
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "forbidden",
            "not_found",
            "conflict",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn podium_schema_lists_three_tiers() {
        let schema_json = schema_to_json::<PodiumTierSchema>();
        assert_eq!(PodiumTierSchema::name(), "crate.domain.PodiumTier");
        for tier in ["gold", "silver", "bronze"] {
            assert!(schema_json.contains(tier), "missing {tier}");
        }
    }
}
