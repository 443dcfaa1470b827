//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: task lifecycle, identity, dashboard, leaderboard and health
//!   endpoints
//! - **Schemas**: request and response bodies plus domain wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`], [`PodiumTierSchema`]) that keep
//!   utoipa out of the domain types
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::identities::{IdentityResponseBody, UpdateIdentityRequestBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, PodiumTierSchema};
use crate::inbound::http::standings::{
    DailyCompletionsBody, DashboardResponseBody, DashboardStatsBody, LeaderboardEntryBody,
    LeaderboardResponseBody,
};
use crate::inbound::http::tasks::{
    AchievementResponse, CreateTaskRequestBody, DeleteTaskResponseBody, ListTasksResponseBody,
    TaskMutationResponseBody, TaskResponse,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Streakboard API",
        description = "Task completion scoring: points, streaks, dashboards and leaderboards.",
        license(name = "ISC", url = "https://opensource.org/license/isc-license-txt")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::complete_task,
        crate::inbound::http::tasks::uncomplete_task,
        crate::inbound::http::tasks::toggle_task,
        crate::inbound::http::tasks::delete_task,
        crate::inbound::http::standings::dashboard,
        crate::inbound::http::standings::leaderboard,
        crate::inbound::http::identities::update_identity,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        PodiumTierSchema,
        CreateTaskRequestBody,
        TaskResponse,
        AchievementResponse,
        ListTasksResponseBody,
        TaskMutationResponseBody,
        DeleteTaskResponseBody,
        DashboardStatsBody,
        DailyCompletionsBody,
        DashboardResponseBody,
        LeaderboardEntryBody,
        LeaderboardResponseBody,
        UpdateIdentityRequestBody,
        IdentityResponseBody,
    )),
    tags(
        (name = "tasks", description = "Task lifecycle and scoring"),
        (name = "standings", description = "Dashboards and leaderboards"),
        (name = "identities", description = "Names shown on the leaderboard"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
