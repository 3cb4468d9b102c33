//! Phonebook entry point: loads settings, picks a contact store, and serves
//! the REST API until interrupted.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use phonebook::inbound::http::health::HealthState;
use phonebook::server::{ServerConfig, build_contact_store, create_server};
use phonebook::settings::PhonebookSettings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let settings = PhonebookSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let store = build_contact_store(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, store))?;
    info!(%bind_addr, "phonebook listening");

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested, draining");
            health_state.mark_draining();
            handle.stop(true).await;
        }
    });

    server.await
}
