//! OpenAPI documentation for the phonebook API.
//!
//! [`ApiDoc`] collects the contact, info, and health handlers together with
//! the schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI
//! serves it in debug builds and `openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{ContactPayloadSchema, ContactSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Phonebook API",
        description = "Create, read, update, and delete phonebook contacts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::info::info,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ContactSchema, ContactPayloadSchema, ErrorBody)),
    tags(
        (name = "contacts", description = "Phonebook contact operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
