//! Backend entry-point: loads settings, wires adapters and serves the API.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{build_http_state, create_server};
use streakboard::config::AppSettings;
use streakboard::inbound::http::health::HealthState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let policy = settings.scoring_policy();
    info!(
        points_per_completion = policy.points_per_completion,
        leaderboard_limit = policy.leaderboard_limit,
        "scoring policy loaded"
    );

    let health_state = web::Data::new(HealthState::new());
    let http_state = build_http_state(policy, Arc::new(DefaultClock));
    let server = create_server(health_state, http_state, settings.bind_addr())?;
    server.await
}
