//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    DashboardQuery, FixtureDashboardQuery, FixtureIdentityCommand, FixtureLeaderboardQuery,
    FixtureTaskCommand, FixtureTaskQuery, IdentityCommand, LeaderboardQuery, TaskCommand,
    TaskQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub tasks: Arc<dyn TaskCommand>,
    pub tasks_query: Arc<dyn TaskQuery>,
    pub dashboard: Arc<dyn DashboardQuery>,
    pub leaderboard: Arc<dyn LeaderboardQuery>,
    pub identities: Arc<dyn IdentityCommand>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use streakboard::domain::ports::{
    ///     FixtureDashboardQuery, FixtureIdentityCommand, FixtureLeaderboardQuery,
    ///     FixtureTaskCommand, FixtureTaskQuery,
    /// };
    /// use streakboard::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureTaskCommand),
    ///     Arc::new(FixtureTaskQuery),
    ///     Arc::new(FixtureDashboardQuery),
    ///     Arc::new(FixtureLeaderboardQuery),
    ///     Arc::new(FixtureIdentityCommand),
    /// );
    /// let _tasks = state.tasks.clone();
    /// ```
    pub fn new(
        tasks: Arc<dyn TaskCommand>,
        tasks_query: Arc<dyn TaskQuery>,
        dashboard: Arc<dyn DashboardQuery>,
        leaderboard: Arc<dyn LeaderboardQuery>,
        identities: Arc<dyn IdentityCommand>,
    ) -> Self {
        Self {
            tasks,
            tasks_query,
            dashboard,
            leaderboard,
            identities,
        }
    }
}

impl Default for HttpState {
    /// State wired to fixture ports, for handler tests.
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureTaskCommand),
            Arc::new(FixtureTaskQuery),
            Arc::new(FixtureDashboardQuery),
            Arc::new(FixtureLeaderboardQuery),
            Arc::new(FixtureIdentityCommand),
        )
    }
}
