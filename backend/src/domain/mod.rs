//! Domain primitives, the scoring engine and the services built on it.
//!
//! Purpose: Define strongly typed task and achievement entities, the pure
//! scoring rules that connect them, and the services that drive those rules
//! through ports. Keep adapters out of this module; they live under
//! `inbound` and `outbound`.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - Task, AchievementRecord: the entities scoring reads and mutates.
//! - ScoringEngine: completion, uncompletion and deletion rules.
//! - rank_leaderboard, compute_dashboard_stats: pure read projections.
//! - TaskCommandService, TaskQueryService, DashboardService,
//!   LeaderboardService, IdentityService: driving port implementations.

pub mod achievements;
pub mod dashboard;
pub mod error;
pub mod identity_service;
pub mod leaderboard;
pub mod ports;
pub mod scoring;
mod service_support;
pub mod standings_service;
pub mod task_service;
pub mod tasks;
pub mod user;
pub mod user_locks;

pub use self::achievements::{AchievementRecord, StreakChange};
pub use self::dashboard::{
    DailyCompletions, DashboardStats, WEEKLY_ACTIVITY_DAYS, WeeklyActivity,
    compute_dashboard_stats, compute_weekly_activity,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identity_service::IdentityService;
pub use self::leaderboard::{LeaderboardEntry, PodiumTier, compare_standing, rank_leaderboard};
pub use self::scoring::{
    CompletionOutcome, DEFAULT_LEADERBOARD_LIMIT, DEFAULT_POINTS_PER_COMPLETION,
    ExpectedTaskState, ScoringEngine, ScoringError, ScoringPolicy,
};
pub use self::standings_service::{DashboardService, LeaderboardService};
pub use self::task_service::{TaskCommandService, TaskQueryService};
pub use self::tasks::{TASK_TITLE_MAX, Task, TaskDraft, TaskId, TaskValidationError};
pub use self::user::{UserId, UserIdentity, UserValidationError};
pub use self::user_locks::{UserLockGuard, UserLocks};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use streakboard::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
