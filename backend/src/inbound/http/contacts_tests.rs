//! Handler tests against mocked driving ports.

use std::io::Write;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockContactsCommand, MockContactsQuery};
use crate::domain::{ContactDraft, ContactId, Error};

fn contact(id: u64, name: &str, number: &str) -> Contact {
    let draft = ContactDraft::try_from_parts(Some(name), Some(number)).expect("valid draft");
    Contact::new(ContactId::Sequence(id), draft)
}

fn state(query: MockContactsQuery, command: MockContactsCommand) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(query), Arc::new(command)))
}

async fn call(
    state: web::Data<HttpState>,
    request: actix_test::TestRequest,
) -> actix_web::dev::ServiceResponse {
    let app = actix_test::init_service(
        App::new().app_data(state).service(
            web::scope("/api")
                .service(list_contacts)
                .service(get_contact)
                .service(create_contact)
                .service(update_contact)
                .service(delete_contact),
        ),
    )
    .await;
    actix_test::call_service(&app, request.to_request()).await
}

#[actix_web::test]
async fn list_returns_contacts_as_json() {
    let mut query = MockContactsQuery::new();
    query
        .expect_list_contacts()
        .times(1)
        .return_once(|| Ok(vec![contact(1, "Arto Hellas", "040-123456")]));

    let response = call(
        state(query, MockContactsCommand::new()),
        actix_test::TestRequest::get().uri("/api/persons"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!([{"id": 1, "name": "Arto Hellas", "number": "040-123456"}])
    );
}

#[actix_web::test]
async fn get_forwards_raw_id() {
    let mut query = MockContactsQuery::new();
    query
        .expect_get_contact()
        .withf(|raw| raw == "17")
        .times(1)
        .return_once(|_| Ok(contact(17, "Ada Lovelace", "39-445323523")));

    let response = call(
        state(query, MockContactsCommand::new()),
        actix_test::TestRequest::get().uri("/api/persons/17"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn get_of_missing_contact_is_empty_404() {
    let mut query = MockContactsQuery::new();
    query
        .expect_get_contact()
        .return_once(|_| Err(Error::not_found("contact 9 not found")));

    let response = call(
        state(query, MockContactsCommand::new()),
        actix_test::TestRequest::get().uri("/api/persons/9"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(actix_test::read_body(response).await.is_empty());
}

#[rstest]
#[case(json!({"name": "Alice", "number": "040-123456"}), Some("Alice"), Some("040-123456"))]
#[case(json!({"name": "Alice"}), Some("Alice"), None)]
#[case(json!({"name": 12345, "number": "040-123456"}), Some("12345"), Some("040-123456"))]
#[case(json!({"name": "   ", "number": "040-123456"}), Some("   "), Some("040-123456"))]
#[case(json!({"name": "", "number": "040-123456"}), None, Some("040-123456"))]
#[case(json!({"name": 0, "number": "040-123456"}), None, Some("040-123456"))]
#[case(json!({"name": true, "number": null}), None, None)]
#[case(json!({"name": {"first": "Alice"}, "number": ["040"]}), None, None)]
#[case(json!(["Alice", "040-123456"]), None, None)]
#[case(json!("Alice"), None, None)]
#[actix_web::test]
async fn create_parses_json_fields_leniently(
    #[case] body: Value,
    #[case] name: Option<&'static str>,
    #[case] number: Option<&'static str>,
) {
    let mut command = MockContactsCommand::new();
    command
        .expect_create_contact()
        .withf(move |payload| {
            payload.name.as_deref() == name && payload.number.as_deref() == number
        })
        .times(1)
        .return_once(|_| Ok(contact(1, "Alice", "040-123456")));

    let response = call(
        state(MockContactsQuery::new(), command),
        actix_test::TestRequest::post()
            .uri("/api/persons")
            .set_json(body),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[case("text/plain", r#"{"name":"Alice","number":"040-123456"}"#)]
#[case("application/json", "{not json")]
#[actix_web::test]
async fn unreadable_bodies_count_as_empty(#[case] content_type: &str, #[case] body: &'static str) {
    let mut command = MockContactsCommand::new();
    command
        .expect_create_contact()
        .withf(|payload| *payload == ContactPayload::default())
        .times(1)
        .return_once(|_| Err(Error::invalid_request("must contain name")));

    let response = call(
        state(MockContactsQuery::new(), command),
        actix_test::TestRequest::post()
            .uri("/api/persons")
            .insert_header(("content-type", content_type))
            .set_payload(body),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = actix_test::read_body_json(response).await;
    assert_eq!(body, ErrorBody::new("must contain name"));
}

#[actix_web::test]
async fn update_forwards_id_and_payload() {
    let mut command = MockContactsCommand::new();
    command
        .expect_update_contact()
        .withf(|raw, payload| raw == "4" && payload.number.as_deref() == Some("050-999999"))
        .times(1)
        .return_once(|_, _| Ok(contact(4, "Alice", "050-999999")));

    let response = call(
        state(MockContactsQuery::new(), command),
        actix_test::TestRequest::put()
            .uri("/api/persons/4")
            .set_json(json!({"name": "Alice", "number": "050-999999"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("number"), Some(&json!("050-999999")));
}

#[actix_web::test]
async fn delete_returns_no_content() {
    let mut command = MockContactsCommand::new();
    command
        .expect_delete_contact()
        .withf(|raw| raw == "4")
        .times(1)
        .return_once(|_| Ok(()));

    let response = call(
        state(MockContactsQuery::new(), command),
        actix_test::TestRequest::delete().uri("/api/persons/4"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(actix_test::read_body(response).await.is_empty());
}

#[actix_web::test]
async fn delete_with_malformed_id_is_bad_request() {
    let mut command = MockContactsCommand::new();
    command
        .expect_delete_contact()
        .return_once(|_| Err(Error::invalid_request("malformatted id")));

    let response = call(
        state(MockContactsQuery::new(), command),
        actix_test::TestRequest::delete().uri("/api/persons/abc"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = actix_test::read_body_json(response).await;
    assert_eq!(body.error, "malformatted id");
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        let bytes = self.0.lock().map(|buf| buf.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut buf) = self.0.lock() {
            buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn request_bodies_are_logged_with_method_and_path() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let req = actix_test::TestRequest::post()
        .uri("/api/persons")
        .insert_header(("content-type", "application/json"))
        .to_http_request();
    let body = br#"{"name":"Alice","number":"040-123456"}"#;

    let payload = tracing::subscriber::with_default(subscriber, || parse_payload(&req, body));

    assert_eq!(payload, ContactPayload::new("Alice", "040-123456"));
    let text = logs.text();
    assert!(text.contains("request body"), "{text}");
    assert!(text.contains("method=POST"), "{text}");
    assert!(text.contains("path=\"/api/persons\""), "{text}");
    assert!(text.contains(r#"{"name":"Alice","number":"040-123456"}"#), "{text}");
}
