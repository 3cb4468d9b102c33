//! Fallback handler for requests no route matches.

use actix_web::HttpResponse;

use crate::inbound::http::error::ErrorBody;

/// Body message for unmatched routes.
pub const UNKNOWN_ENDPOINT_MESSAGE: &str = "unknown endpoint";

/// Respond `404 {"error":"unknown endpoint"}`.
///
/// Registered as the application's default service.
pub async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(UNKNOWN_ENDPOINT_MESSAGE))
}
