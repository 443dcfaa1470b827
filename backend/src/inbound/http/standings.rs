//! Dashboard and leaderboard HTTP handlers.
//!
//! ```text
//! GET /api/v1/users/{user_id}/dashboard
//! GET /api/v1/leaderboard?limit=N
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{DashboardRequest, LeaderboardRequest};
use crate::domain::{DailyCompletions, DashboardStats, LeaderboardEntry, PodiumTier};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PodiumTierSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{LIMIT, USER_ID, parse_optional_count, parse_user_id};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsBody {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub pending_tasks: u64,
    pub points: u64,
    pub streak: u32,
}

impl From<DashboardStats> for DashboardStatsBody {
    fn from(value: DashboardStats) -> Self {
        Self {
            total_tasks: value.total_tasks,
            completed_tasks: value.completed_tasks,
            pending_tasks: value.pending_tasks,
            points: value.points,
            streak: value.streak,
        }
    }
}

/// Completions on one day of the trailing week.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyCompletionsBody {
    #[schema(example = "2026-03-06")]
    pub date: String,
    #[schema(example = "Fri")]
    pub weekday: String,
    pub completed: u64,
}

impl From<DailyCompletions> for DailyCompletionsBody {
    fn from(value: DailyCompletions) -> Self {
        Self {
            date: value.date.to_string(),
            weekday: value.weekday.to_string(),
            completed: value.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponseBody {
    pub stats: DashboardStatsBody,
    /// Seven entries, oldest first, ending today (UTC).
    pub weekly_activity: Vec<DailyCompletionsBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryBody {
    pub rank: usize,
    pub user_id: String,
    pub display_name: String,
    #[schema(example = "A")]
    pub avatar_initial: String,
    pub points: u64,
    pub tasks_completed: u64,
    pub current_streak: u32,
    #[schema(value_type = Option<PodiumTierSchema>)]
    pub podium: Option<PodiumTier>,
}

impl From<LeaderboardEntry> for LeaderboardEntryBody {
    fn from(value: LeaderboardEntry) -> Self {
        Self {
            rank: value.rank,
            user_id: value.user_id.to_string(),
            display_name: value.display_name,
            avatar_initial: value.avatar_initial.to_string(),
            points: value.points,
            tasks_completed: value.tasks_completed,
            current_streak: value.current_streak,
            podium: value.podium,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponseBody {
    pub entries: Vec<LeaderboardEntryBody>,
}

/// Query parameters for the leaderboard.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardParams {
    /// Maximum number of entries, 1 to 100. Defaults to the configured limit.
    #[param(value_type = Option<usize>)]
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardPath {
    user_id: String,
}

/// Completion counters and trailing-week activity for one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/dashboard",
    params(("user_id" = String, Path, description = "Dashboard owner")),
    responses(
        (status = 200, description = "Dashboard", body = DashboardResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["standings"],
    operation_id = "getDashboard"
)]
#[get("/users/{user_id}/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    path: web::Path<DashboardPath>,
) -> ApiResult<web::Json<DashboardResponseBody>> {
    let user_id = parse_user_id(&path.into_inner().user_id, USER_ID)?;
    let response = state.dashboard.dashboard(DashboardRequest { user_id }).await?;

    Ok(web::Json(DashboardResponseBody {
        stats: response.stats.into(),
        weekly_activity: response
            .weekly_activity
            .days
            .into_iter()
            .map(DailyCompletionsBody::from)
            .collect(),
    }))
}

/// Ranked standings by points.
#[utoipa::path(
    get,
    path = "/api/v1/leaderboard",
    params(LeaderboardParams),
    responses(
        (status = 200, description = "Leaderboard", body = LeaderboardResponseBody),
        (status = 400, description = "Invalid limit", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["standings"],
    operation_id = "getLeaderboard"
)]
#[get("/leaderboard")]
pub async fn leaderboard(
    state: web::Data<HttpState>,
    query: web::Query<LeaderboardParams>,
) -> ApiResult<web::Json<LeaderboardResponseBody>> {
    let limit = parse_optional_count(query.into_inner().limit, LIMIT)?;
    let response = state
        .leaderboard
        .leaderboard(LeaderboardRequest { limit })
        .await?;

    Ok(web::Json(LeaderboardResponseBody {
        entries: response
            .entries
            .into_iter()
            .map(LeaderboardEntryBody::from)
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::ports::{LeaderboardResponse, MockLeaderboardQuery};
    use crate::domain::{Error, UserId};
    use crate::inbound::http::validation::query_config;

    const USER: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    fn leaderboard_state(query: MockLeaderboardQuery) -> HttpState {
        HttpState {
            leaderboard: Arc::new(query),
            ..HttpState::default()
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn dashboard_renders_fixture_stats() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::default()))
                .service(web::scope("/api/v1").service(dashboard)),
        )
        .await;
        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/v1/users/{USER}/dashboard"))
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.pointer("/stats/totalTasks").and_then(Value::as_u64),
            Some(0)
        );
        assert!(body.get("weeklyActivity").is_some_and(Value::is_array));
    }

    #[rstest]
    #[actix_web::test]
    async fn leaderboard_passes_limit_and_renders_podium() {
        let mut query = MockLeaderboardQuery::new();
        query
            .expect_leaderboard()
            .withf(|request: &LeaderboardRequest| request.limit == Some(3))
            .times(1)
            .returning(|_| {
                Ok(LeaderboardResponse {
                    entries: vec![LeaderboardEntry {
                        rank: 1,
                        user_id: UserId::new(USER).expect("valid id"),
                        display_name: "Ada".to_owned(),
                        avatar_initial: 'A',
                        points: 50,
                        tasks_completed: 5,
                        current_streak: 2,
                        podium: Some(PodiumTier::Gold),
                    }],
                })
            });
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(leaderboard_state(query)))
                .service(web::scope("/api/v1").service(leaderboard)),
        )
        .await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/leaderboard?limit=3")
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.pointer("/entries/0/podium").and_then(Value::as_str),
            Some("gold")
        );
        assert_eq!(
            body.pointer("/entries/0/avatarInitial")
                .and_then(Value::as_str),
            Some("A")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn leaderboard_surfaces_invalid_limit() {
        let mut query = MockLeaderboardQuery::new();
        query
            .expect_leaderboard()
            .times(1)
            .returning(|_| Err(Error::invalid_request("limit must be between 1 and 100")));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(leaderboard_state(query)))
                .service(web::scope("/api/v1").service(leaderboard)),
        )
        .await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/leaderboard?limit=0")
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[actix_web::test]
    async fn non_numeric_limit_is_a_json_field_error() {
        let mut query = MockLeaderboardQuery::new();
        query.expect_leaderboard().times(0);
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(leaderboard_state(query)))
                .service(web::scope("/api/v1").service(leaderboard)),
        )
        .await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/leaderboard?limit=abc")
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
        assert_eq!(
            body.pointer("/details/field").and_then(Value::as_str),
            Some("limit")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_query_string_is_a_json_error() {
        let mut query = MockLeaderboardQuery::new();
        query.expect_leaderboard().times(0);
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(leaderboard_state(query)))
                .service(
                    web::scope("/api/v1")
                        .app_data(query_config())
                        .service(leaderboard),
                ),
        )
        .await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/leaderboard?limit=1&limit=2")
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.pointer("/details/code").and_then(Value::as_str),
            Some("invalid_query")
        );
    }
}
