//! HTTP inbound adapter exposing the phonebook REST endpoints.

pub mod contacts;
pub mod error;
pub mod fallback;
pub mod health;
pub mod info;
pub mod schemas;
pub mod state;

use actix_web::middleware::NormalizePath;
use actix_web::web;

pub use error::ApiResult;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Register the `/api` scope: contact CRUD and the info page.
///
/// Trailing slashes are trimmed inside the scope, so `/api/persons/` lists
/// contacts like `/api/persons`.
///
/// Health checks, documentation, and the fallback handler are registered by
/// the server separately.
///
/// ```
/// use actix_web::App;
/// use phonebook::inbound::http::configure_api;
///
/// let app = App::new().configure(configure_api);
/// # let _ = app;
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(NormalizePath::trim())
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .service(info::info)
            .service(contacts::list_contacts)
            .service(contacts::create_contact)
            .service(contacts::get_contact)
            .service(contacts::update_contact)
            .service(contacts::delete_contact),
    );
}
