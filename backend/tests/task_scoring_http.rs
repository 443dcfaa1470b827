//! End-to-end tests of the HTTP API over the in-memory adapters.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};
use streakboard::domain::ports::{
    CreateTaskRequest, DashboardQuery, DashboardRequest, LeaderboardQuery, LeaderboardRequest,
    TaskCommand, TaskMutationRequest,
};
use streakboard::domain::{
    DashboardService, IdentityService, LeaderboardService, ScoringEngine, ScoringPolicy,
    TaskCommandService, TaskId, TaskQueryService, UserId, UserIdentity,
};
use streakboard::inbound::http::configure_api;
use streakboard::inbound::http::state::HttpState;
use streakboard::outbound::memory::{
    InMemoryAchievementRepository, InMemoryIdentityDirectory, InMemoryTaskRepository,
};
use streakboard::test_support::clock::{MutableClock, utc};

const ADA: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
const GRACE: &str = "9b2f9c1e-0d0a-4c53-8d7e-8f3d1f0b4a11";

struct Harness {
    state: HttpState,
    clock: Arc<MutableClock>,
}

fn harness() -> Harness {
    let clock = Arc::new(MutableClock::new(utc(2026, 3, 1, 9)));
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let achievements = Arc::new(InMemoryAchievementRepository::new());
    let identities = Arc::new(InMemoryIdentityDirectory::new());
    identities
        .register(
            UserId::new(ADA).expect("valid id"),
            UserIdentity::new(Some("Ada Lovelace".to_owned()), "ada@example.com")
                .expect("valid identity"),
        )
        .expect("register identity");

    let policy = ScoringPolicy::default();
    let state = HttpState::new(
        Arc::new(TaskCommandService::new(
            tasks.clone(),
            achievements.clone(),
            clock.clone(),
            ScoringEngine::new(policy),
        )),
        Arc::new(TaskQueryService::new(tasks.clone())),
        Arc::new(DashboardService::new(
            tasks,
            achievements.clone(),
            clock.clone(),
        )),
        Arc::new(LeaderboardService::new(
            achievements,
            identities.clone(),
            policy,
        )),
        Arc::new(IdentityService::new(identities)),
    );
    Harness { state, clock }
}

macro_rules! init_app {
    ($state:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .service(web::scope("/api/v1").configure(configure_api)),
        )
        .await
    };
}

fn field<'a>(body: &'a Value, pointer: &str) -> &'a Value {
    body.pointer(pointer)
        .unwrap_or_else(|| panic!("missing {pointer} in {body}"))
}

#[rstest]
#[actix_web::test]
async fn task_lifecycle_drives_points_streak_and_standings() {
    let Harness { state, clock } = harness();
    let app = init_app!(state);

    let create = |title: &str| {
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/users/{ADA}/tasks"))
            .set_json(json!({ "title": title }))
            .to_request()
    };
    let post = |task_id: &str, action: &str| {
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/users/{ADA}/tasks/{task_id}/{action}"))
            .to_request()
    };

    let first: Value = actix_test::call_and_read_body_json(&app, create("Read a chapter")).await;
    let first_id = field(&first, "/id").as_str().expect("id").to_owned();

    let completed: Value =
        actix_test::call_and_read_body_json(&app, post(&first_id, "complete")).await;
    assert_eq!(field(&completed, "/pointsAwarded"), 10);
    assert_eq!(field(&completed, "/achievements/points"), 10);
    assert_eq!(field(&completed, "/achievements/currentStreak"), 1);
    assert_eq!(field(&completed, "/task/completed"), true);

    let repeat: Value =
        actix_test::call_and_read_body_json(&app, post(&first_id, "complete")).await;
    assert_eq!(field(&repeat, "/changed"), false);
    assert_eq!(field(&repeat, "/achievements/points"), 10);

    clock.advance_days(1);
    let second: Value = actix_test::call_and_read_body_json(&app, create("Go for a run")).await;
    let second_id = field(&second, "/id").as_str().expect("id").to_owned();
    let toggled: Value =
        actix_test::call_and_read_body_json(&app, post(&second_id, "toggle")).await;
    assert_eq!(field(&toggled, "/achievements/points"), 20);
    assert_eq!(field(&toggled, "/achievements/currentStreak"), 2);
    assert_eq!(field(&toggled, "/achievements/tasksCompleted"), 2);

    let reopened: Value =
        actix_test::call_and_read_body_json(&app, post(&second_id, "uncomplete")).await;
    assert_eq!(field(&reopened, "/achievements/points"), 20);
    assert_eq!(field(&reopened, "/achievements/tasksCompleted"), 1);
    assert_eq!(field(&reopened, "/task/completedAt"), &Value::Null);

    let deleted: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/users/{ADA}/tasks/{first_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(field(&deleted, "/releasedCompletion"), true);
    assert_eq!(field(&deleted, "/achievements/tasksCompleted"), 0);

    let dashboard: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/users/{ADA}/dashboard"))
            .to_request(),
    )
    .await;
    assert_eq!(field(&dashboard, "/stats/totalTasks"), 1);
    assert_eq!(field(&dashboard, "/stats/pendingTasks"), 1);
    assert_eq!(field(&dashboard, "/stats/points"), 20);
    assert_eq!(field(&dashboard, "/stats/streak"), 2);
    let week = field(&dashboard, "/weeklyActivity")
        .as_array()
        .expect("weekly activity array");
    assert_eq!(week.len(), 7);
    assert_eq!(field(&dashboard, "/weeklyActivity/6/date"), "2026-03-02");

    let board: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/leaderboard").to_request(),
    )
    .await;
    assert_eq!(field(&board, "/entries/0/displayName"), "Ada Lovelace");
    assert_eq!(field(&board, "/entries/0/avatarInitial"), "A");
    assert_eq!(field(&board, "/entries/0/podium"), "gold");
}

#[rstest]
#[actix_web::test]
async fn other_users_cannot_touch_a_task() {
    let Harness { state, .. } = harness();
    let app = init_app!(state);
    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/users/{ADA}/tasks"))
            .set_json(json!({ "title": "Private" }))
            .to_request(),
    )
    .await;
    let task_id = field(&created, "/id").as_str().expect("id").to_owned();

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/users/{GRACE}/tasks/{task_id}/complete"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[rstest]
#[case("/api/v1/leaderboard?limit=0")]
#[case("/api/v1/leaderboard?limit=101")]
#[case("/api/v1/leaderboard?limit=abc")]
#[case("/api/v1/users/not-a-uuid/dashboard")]
#[actix_web::test]
async fn malformed_requests_are_rejected(#[case] uri: &str) {
    let Harness { state, .. } = harness();
    let app = init_app!(state);

    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_completions_by_one_user_are_all_counted() {
    let Harness { state, .. } = harness();
    let commands: Arc<dyn TaskCommand> = state.tasks.clone();
    let owner = UserId::new(ADA).expect("valid id");

    let mut task_ids = Vec::new();
    for n in 0..20 {
        let created = commands
            .create_task(CreateTaskRequest {
                user_id: owner.clone(),
                title: format!("Task {n}"),
                description: None,
                due_date: None,
            })
            .await
            .expect("create task");
        task_ids.push(created.task.id);
    }

    let handles: Vec<_> = task_ids
        .into_iter()
        .map(|task_id| {
            let commands = commands.clone();
            let user_id = owner.clone();
            tokio::spawn(async move {
                commands
                    .complete_task(TaskMutationRequest { user_id, task_id })
                    .await
            })
        })
        .collect();

    let mut last = None;
    for handle in handles {
        let response = handle.await.expect("task joins").expect("completion succeeds");
        assert!(response.changed);
        last = Some(response.achievements);
    }

    let dashboard = state
        .dashboard
        .dashboard(DashboardRequest { user_id: owner })
        .await
        .expect("dashboard");
    assert_eq!(dashboard.stats.points, 200);
    assert_eq!(dashboard.stats.completed_tasks, 20);
    assert!(last.is_some());

    let board = state
        .leaderboard
        .leaderboard(LeaderboardRequest::default())
        .await
        .expect("leaderboard");
    let entry = board.entries.first().expect("owner ranked");
    assert_eq!(entry.tasks_completed, 20);
    assert_eq!(entry.points, 200);
}

#[rstest]
#[actix_web::test]
async fn registered_identity_names_the_leaderboard_row() {
    let Harness { state, .. } = harness();
    let app = init_app!(state);

    let stored: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/users/{GRACE}/identity"))
            .set_json(json!({ "fullName": "Grace Hopper", "email": "grace@example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(field(&stored, "/displayName"), "Grace Hopper");

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/users/{GRACE}/tasks"))
            .set_json(json!({ "title": "Debug the relay" }))
            .to_request(),
    )
    .await;
    let task_id = field(&created, "/id").as_str().expect("id").to_owned();
    let _: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/users/{GRACE}/tasks/{task_id}/complete"))
            .to_request(),
    )
    .await;

    let board: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/leaderboard").to_request(),
    )
    .await;
    assert_eq!(field(&board, "/entries/0/userId"), GRACE);
    assert_eq!(field(&board, "/entries/0/displayName"), "Grace Hopper");
    assert_eq!(field(&board, "/entries/0/avatarInitial"), "G");
}

#[rstest]
#[actix_web::test]
async fn identity_without_name_displays_the_email() {
    let Harness { state, .. } = harness();
    let app = init_app!(state);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/users/{GRACE}/identity"))
            .set_json(json!({ "fullName": "  ", "email": "grace@example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(field(&body, "/displayName"), "grace@example.com");
    assert_eq!(field(&body, "/fullName"), &Value::Null);

    let rejected = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/users/{GRACE}/identity"))
            .set_json(json!({ "email": "not-an-email" }))
            .to_request(),
    )
    .await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
}

/// One user action in a mixed sequence, indexing into the created tasks.
#[derive(Debug, Clone, Copy)]
enum Step {
    Complete(usize),
    Uncomplete(usize),
    Toggle(usize),
    Delete(usize),
}

#[rstest]
#[case::duplicates_and_toggles(vec![
    Step::Complete(0),
    Step::Complete(0),
    Step::Toggle(1),
    Step::Uncomplete(0),
    Step::Uncomplete(0),
    Step::Delete(1),
    Step::Delete(2),
])]
#[case::reopen_then_delete(vec![
    Step::Toggle(0),
    Step::Toggle(1),
    Step::Toggle(2),
    Step::Toggle(1),
    Step::Delete(0),
    Step::Complete(1),
    Step::Uncomplete(2),
    Step::Delete(2),
])]
#[case::uncomplete_before_anything(vec![
    Step::Uncomplete(0),
    Step::Delete(0),
    Step::Complete(1),
    Step::Complete(2),
    Step::Delete(1),
    Step::Toggle(2),
    Step::Toggle(2),
])]
#[tokio::test]
async fn record_count_tracks_completed_tasks_across_mixed_steps(#[case] steps: Vec<Step>) {
    let Harness { state, .. } = harness();
    let owner = UserId::new(ADA).expect("valid id");

    let mut task_ids: Vec<TaskId> = Vec::new();
    for n in 0..3 {
        let created = state
            .tasks
            .create_task(CreateTaskRequest {
                user_id: owner.clone(),
                title: format!("Chore {n}"),
                description: None,
                due_date: None,
            })
            .await
            .expect("create task");
        task_ids.push(created.task.id);
    }

    for step in steps {
        let request = |index: usize| TaskMutationRequest {
            user_id: owner.clone(),
            task_id: task_ids[index],
        };
        let recorded = match step {
            Step::Complete(index) => state
                .tasks
                .complete_task(request(index))
                .await
                .map(|response| response.achievements),
            Step::Uncomplete(index) => state
                .tasks
                .uncomplete_task(request(index))
                .await
                .map(|response| response.achievements),
            Step::Toggle(index) => state
                .tasks
                .toggle_task(request(index))
                .await
                .map(|response| response.achievements),
            Step::Delete(index) => state
                .tasks
                .delete_task(request(index))
                .await
                .map(|response| response.achievements),
        }
        .unwrap_or_else(|err| panic!("{step:?} failed: {err}"));

        let dashboard = state
            .dashboard
            .dashboard(DashboardRequest {
                user_id: owner.clone(),
            })
            .await
            .expect("dashboard");
        assert_eq!(
            recorded.tasks_completed, dashboard.stats.completed_tasks,
            "record and tasks disagree after {step:?}"
        );
    }
}
