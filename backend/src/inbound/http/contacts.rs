//! Contact API handlers.
//!
//! ```text
//! GET    /api/persons
//! POST   /api/persons        {"name":"Arto Hellas","number":"040-123456"}
//! GET    /api/persons/{id}
//! PUT    /api/persons/{id}   {"name":"Arto Hellas","number":"040-654321"}
//! DELETE /api/persons/{id}
//! ```
//!
//! Bodies are read as raw bytes and parsed leniently: anything that is not a
//! JSON object sent as `application/json` counts as an empty object. A
//! non-empty string field is kept as sent and a non-zero number is kept as
//! its decimal text. Empty strings, zero, `null`, booleans, arrays and
//! objects count as missing.
//! Validation then reports the first missing field.

use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, post, put, web};
use serde_json::{Map, Value};
use tracing::field::display;
use tracing::info;

use crate::domain::Contact;
use crate::domain::ports::ContactPayload;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{ContactPayloadSchema, ContactSchema};
use crate::inbound::http::state::HttpState;
use crate::middleware::trace::TraceId;

fn field_text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64().is_some_and(|value| value != 0.0) => {
            Some(number.to_string())
        }
        _ => None,
    }
}

/// Log the request body and extract contact fields from it.
pub(crate) fn parse_payload(req: &HttpRequest, body: &[u8]) -> ContactPayload {
    info!(
        trace_id = TraceId::current().map(display),
        method = %req.method(),
        path = req.path(),
        body = %String::from_utf8_lossy(body),
        "request body"
    );
    if !req.content_type().eq_ignore_ascii_case("application/json") {
        return ContactPayload::default();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => ContactPayload {
            name: field_text(&object, "name"),
            number: field_text(&object, "number"),
        },
        _ => ContactPayload::default(),
    }
}

/// List every contact.
#[utoipa::path(
    get,
    path = "/api/persons",
    responses(
        (status = 200, description = "All contacts", body = [ContactSchema]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/persons")]
pub async fn list_contacts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Contact>>> {
    let contacts = state.contacts.list_contacts().await?;
    Ok(web::Json(contacts))
}

/// Fetch one contact.
#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact", body = ContactSchema),
        (status = 400, description = "Malformed identifier", body = ErrorBody),
        (status = 404, description = "No contact with this identifier")
    ),
    tags = ["contacts"],
    operation_id = "getContact"
)]
#[get("/persons/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Contact>> {
    let contact = state.contacts.get_contact(&path.into_inner()).await?;
    Ok(web::Json(contact))
}

/// Add a contact with a unique name.
#[utoipa::path(
    post,
    path = "/api/persons",
    request_body = ContactPayloadSchema,
    responses(
        (status = 200, description = "Created contact", body = ContactSchema),
        (status = 400, description = "Validation failure or duplicate name", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/persons")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<web::Json<Contact>> {
    let payload = parse_payload(&req, &body);
    let contact = state.contacts_command.create_contact(payload).await?;
    Ok(web::Json(contact))
}

/// Replace a contact's name and number.
#[utoipa::path(
    put,
    path = "/api/persons/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    request_body = ContactPayloadSchema,
    responses(
        (status = 200, description = "Updated contact", body = ContactSchema),
        (status = 400, description = "Malformed identifier or validation failure", body = ErrorBody),
        (status = 404, description = "No contact with this identifier")
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[put("/persons/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<web::Json<Contact>> {
    let payload = parse_payload(&req, &body);
    let contact = state
        .contacts_command
        .update_contact(&path.into_inner(), payload)
        .await?;
    Ok(web::Json(contact))
}

/// Remove a contact. Removing an unknown contact also succeeds.
#[utoipa::path(
    delete,
    path = "/api/persons/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    responses(
        (status = 204, description = "Contact removed or already absent"),
        (status = 400, description = "Malformed identifier", body = ErrorBody)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/persons/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state
        .contacts_command
        .delete_contact(&path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
