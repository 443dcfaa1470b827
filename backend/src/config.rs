//! Service configuration loaded via OrthoConfig.
//!
//! Every field may come from CLI flags, `STREAKBOARD_*` environment
//! variables or a configuration file. Unset values fall back to the
//! defaults below.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_LEADERBOARD_LIMIT, DEFAULT_POINTS_PER_COMPLETION, ScoringPolicy};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Settings controlling the HTTP listener and scoring policy.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STREAKBOARD")]
pub struct AppSettings {
    /// Address to bind the HTTP listener to.
    pub host: Option<IpAddr>,
    /// Port to bind the HTTP listener to.
    pub port: Option<u16>,
    /// Points awarded for each task completion.
    pub points_per_completion: Option<u64>,
    /// Leaderboard length when a request does not name one.
    pub leaderboard_limit: Option<usize>,
}

impl AppSettings {
    /// Socket address for the HTTP listener.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Scoring constants, with defaults for anything unset.
    ///
    /// A leaderboard limit of zero is treated as unset.
    pub fn scoring_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            points_per_completion: self
                .points_per_completion
                .unwrap_or(DEFAULT_POINTS_PER_COMPLETION),
            leaderboard_limit: self
                .leaderboard_limit
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_LEADERBOARD_LIMIT),
        }
    }
}
