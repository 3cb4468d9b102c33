//! Phonebook summary page.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use chrono::{DateTime, Utc};

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Render the summary HTML fragment.
///
/// The timestamp is rendered in UTC with the zone spelled out.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use phonebook::inbound::http::info::render_info;
///
/// let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
/// assert_eq!(
///     render_info(2, at),
///     "<div><p>Phonebook has info for 2 people</p>\
///      <p>Sat Mar 14 2026 09:26:53 GMT+0000 (Coordinated Universal Time)</p></div>"
/// );
/// ```
pub fn render_info(count: usize, generated_at: DateTime<Utc>) -> String {
    format!(
        "<div><p>Phonebook has info for {count} people</p><p>{}</p></div>",
        generated_at.format("%a %b %d %Y %H:%M:%S GMT%z (Coordinated Universal Time)")
    )
}

/// Report how many contacts are stored and when the report was produced.
#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Summary page", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["contacts"],
    operation_id = "phonebookInfo"
)]
#[get("/info")]
pub async fn info(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let summary = state.contacts.phonebook_info().await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_info(summary.contact_count, summary.generated_at)))
}
