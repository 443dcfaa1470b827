//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod identities;
pub mod schemas;
pub mod standings;
pub mod state;
pub mod tasks;
pub mod validation;

pub use error::ApiResult;

/// Register every `/api/v1` handler on `cfg`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::query_config())
        .service(tasks::list_tasks)
        .service(tasks::create_task)
        .service(tasks::complete_task)
        .service(tasks::uncomplete_task)
        .service(tasks::toggle_task)
        .service(tasks::delete_task)
        .service(standings::dashboard)
        .service(standings::leaderboard)
        .service(identities::update_identity);
}
