//! Server construction and middleware wiring.

mod config;
mod store;

pub use config::ServerConfig;
pub use store::build_contact_store;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::PhonebookService;
use crate::domain::ports::ContactStore;
use crate::inbound::http::configure_api;
use crate::inbound::http::fallback::unknown_endpoint;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;

/// Shared state handed to every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    /// Readiness flags shared with the bootstrap.
    pub health_state: web::Data<HealthState>,
    /// Driving ports for the contact handlers.
    pub http_state: web::Data<HttpState>,
}

impl AppDependencies {
    /// Wire the phonebook service over `store`.
    pub fn new(
        health_state: web::Data<HealthState>,
        store: Arc<dyn ContactStore>,
        clock: Arc<dyn mockable::Clock>,
    ) -> Self {
        let service = Arc::new(PhonebookService::new(store, clock));
        Self {
            health_state,
            http_state: web::Data::new(HttpState::from_service(service)),
        }
    }
}

/// Assemble the application: tracing, `/api` routes, health probes, docs in
/// debug builds, and the unknown-endpoint fallback.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(unknown_endpoint))
}

/// Bind the listener and start the server.
///
/// The returned [`Server`] must be awaited to serve requests. Readiness is
/// marked once the socket is bound.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        store,
        clock,
    } = config;
    let deps = AppDependencies::new(health_state.clone(), store, clock);

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
