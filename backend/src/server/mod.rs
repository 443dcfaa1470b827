//! Server construction and middleware wiring.

mod state_builders;

pub use state_builders::build_http_state;

use std::net::SocketAddr;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use streakboard::Trace;
#[cfg(debug_assertions)]
use streakboard::doc::ApiDoc;
use streakboard::inbound::http::configure_api;
use streakboard::inbound::http::health::{HealthState, live, ready};
use streakboard::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server bound to `bind_addr`.
///
/// Readiness is flagged once the listener is bound; the returned [`Server`]
/// must be awaited to drive it.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    bind_addr: SocketAddr,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
