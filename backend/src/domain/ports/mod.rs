//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod achievement_repository;
mod dashboard_query;
mod identity_command;
mod identity_provider;
mod leaderboard_query;
mod task_command;
mod task_query;
mod task_repository;

#[cfg(test)]
pub use achievement_repository::MockAchievementRepository;
pub use achievement_repository::{
    AchievementRepository, AchievementRepositoryError, FixtureAchievementRepository,
};
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
pub use dashboard_query::{
    DashboardQuery, DashboardRequest, DashboardResponse, FixtureDashboardQuery,
};
#[cfg(test)]
pub use identity_command::MockIdentityCommand;
pub use identity_command::{
    FixtureIdentityCommand, IdentityCommand, IdentityPayload, UpdateIdentityRequest,
};
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{FixtureIdentityProvider, IdentityProvider, IdentityProviderError};
#[cfg(test)]
pub use leaderboard_query::MockLeaderboardQuery;
pub use leaderboard_query::{
    FixtureLeaderboardQuery, LEADERBOARD_LIMIT_MAX, LeaderboardQuery, LeaderboardRequest,
    LeaderboardResponse,
};
#[cfg(test)]
pub use task_command::MockTaskCommand;
pub use task_command::{
    AchievementPayload, CreateTaskRequest, CreateTaskResponse, DeleteTaskResponse,
    FixtureTaskCommand, TaskCommand, TaskMutationRequest, TaskMutationResponse, TaskPayload,
};
#[cfg(test)]
pub use task_query::MockTaskQuery;
pub use task_query::{FixtureTaskQuery, ListTasksRequest, ListTasksResponse, TaskQuery};
#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::{FixtureTaskRepository, TaskRepository, TaskRepositoryError};
