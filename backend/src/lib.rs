//! Task completion scoring service.
//!
//! The `domain` module holds the scoring engine and the services built on
//! it. `inbound` and `outbound` hold the HTTP and in-memory adapters.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
