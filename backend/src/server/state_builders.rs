//! Builders wiring in-memory adapters into the HTTP state ports.

use std::sync::Arc;

use mockable::Clock;

use streakboard::domain::{
    DashboardService, IdentityService, LeaderboardService, ScoringEngine, ScoringPolicy,
    TaskCommandService, TaskQueryService,
};
use streakboard::inbound::http::state::HttpState;
use streakboard::outbound::memory::{
    InMemoryAchievementRepository, InMemoryIdentityDirectory, InMemoryTaskRepository,
};

/// Build the HTTP state over shared in-memory stores.
///
/// All services see the same task, achievement and identity maps, so writes
/// made by the command services are visible to the dashboard and leaderboard.
pub fn build_http_state(policy: ScoringPolicy, clock: Arc<dyn Clock>) -> HttpState {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let achievements = Arc::new(InMemoryAchievementRepository::new());
    let identities = Arc::new(InMemoryIdentityDirectory::new());

    let command = TaskCommandService::new(
        tasks.clone(),
        achievements.clone(),
        clock.clone(),
        ScoringEngine::new(policy),
    );
    let query = TaskQueryService::new(tasks.clone());
    let dashboard = DashboardService::new(tasks, achievements.clone(), clock);
    let leaderboard = LeaderboardService::new(achievements, identities.clone(), policy);
    let identity = IdentityService::new(identities);

    HttpState::new(
        Arc::new(command),
        Arc::new(query),
        Arc::new(dashboard),
        Arc::new(leaderboard),
        Arc::new(identity),
    )
}
