//! Behaviour tests for the phonebook service over the in-memory store.

use std::cell::RefCell;
use std::sync::Arc;

use phonebook::domain::ports::{ContactPayload, ContactsCommand, ContactsQuery, PhonebookInfo};
use phonebook::domain::{Contact, Error, ErrorCode, PhonebookService};
use phonebook::outbound::memory::{InMemoryContactStore, sample_contacts};
use phonebook::test_support::FixedClock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;

type Service = PhonebookService<InMemoryContactStore>;

struct PhonebookWorld {
    runtime: Runtime,
    service: RefCell<Option<Service>>,
    last_contact: RefCell<Option<Contact>>,
    last_error: RefCell<Option<Error>>,
    info: RefCell<Option<PhonebookInfo>>,
}

impl PhonebookWorld {
    fn new() -> Self {
        Self {
            runtime: Runtime::new().expect("tokio runtime should initialize"),
            service: RefCell::new(None),
            last_contact: RefCell::new(None),
            last_error: RefCell::new(None),
            info: RefCell::new(None),
        }
    }

    fn install(&self, store: InMemoryContactStore) {
        let service = PhonebookService::new(Arc::new(store), Arc::new(FixedClock::fixture()));
        *self.service.borrow_mut() = Some(service);
    }

    fn service(&self) -> Service {
        self.service
            .borrow()
            .as_ref()
            .expect("phonebook should be set up")
            .clone()
    }

    fn record(&self, result: Result<Contact, Error>) {
        match result {
            Ok(contact) => {
                *self.last_contact.borrow_mut() = Some(contact);
                *self.last_error.borrow_mut() = None;
            }
            Err(error) => *self.last_error.borrow_mut() = Some(error),
        }
    }

    fn last_contact(&self) -> Contact {
        self.last_contact
            .borrow()
            .clone()
            .expect("a contact should have been recorded")
    }

    fn last_error(&self) -> Error {
        self.last_error
            .borrow()
            .clone()
            .expect("an error should have been recorded")
    }

    fn create(&self, payload: ContactPayload) {
        let service = self.service();
        let result = self
            .runtime
            .block_on(async move { service.create_contact(payload).await });
        self.record(result);
    }
}

#[fixture]
fn world() -> PhonebookWorld {
    PhonebookWorld::new()
}

#[given("an empty phonebook")]
fn an_empty_phonebook(world: &PhonebookWorld) {
    world.install(InMemoryContactStore::new());
}

#[given("the sample phonebook")]
fn the_sample_phonebook(world: &PhonebookWorld) {
    let samples = sample_contacts().expect("sample contacts are valid");
    world.install(InMemoryContactStore::seeded(samples));
}

#[given("a stored contact named {name} with number {number}")]
fn a_stored_contact(world: &PhonebookWorld, name: String, number: String) {
    world.create(ContactPayload::new(name, number));
    assert!(world.last_error.borrow().is_none(), "seed contact rejected");
}

#[when("a contact named {name} with number {number} is added")]
fn a_contact_is_added(world: &PhonebookWorld, name: String, number: String) {
    world.create(ContactPayload::new(name, number));
}

#[when("a contact named {name} without a number is added")]
fn a_contact_without_number_is_added(world: &PhonebookWorld, name: String) {
    world.create(ContactPayload {
        name: Some(name),
        number: None,
    });
}

#[when("the last contact is deleted twice")]
fn the_last_contact_is_deleted_twice(world: &PhonebookWorld) {
    let service = world.service();
    let raw_id = world.last_contact().id().to_string();
    world.runtime.block_on(async move {
        service.delete_contact(&raw_id).await.expect("first delete");
        service.delete_contact(&raw_id).await.expect("second delete");
    });
}

#[when("the last contact is updated to number {number}")]
fn the_last_contact_is_updated(world: &PhonebookWorld, number: String) {
    let service = world.service();
    let contact = world.last_contact();
    let raw_id = contact.id().to_string();
    let payload = ContactPayload::new(contact.name().as_ref(), number);
    let result = world
        .runtime
        .block_on(async move { service.update_contact(&raw_id, payload).await });
    world.record(result);
}

#[when("the contact with id {raw_id} is fetched")]
fn the_contact_is_fetched(world: &PhonebookWorld, raw_id: String) {
    let service = world.service();
    let result = world
        .runtime
        .block_on(async move { service.get_contact(&raw_id).await });
    world.record(result);
}

#[when("the phonebook info is requested")]
fn the_phonebook_info_is_requested(world: &PhonebookWorld) {
    let service = world.service();
    let info = world
        .runtime
        .block_on(async move { service.phonebook_info().await })
        .expect("info should load");
    *world.info.borrow_mut() = Some(info);
}

#[then("the operation succeeds")]
fn the_operation_succeeds(world: &PhonebookWorld) {
    let error = world.last_error.borrow();
    assert!(error.is_none(), "unexpected error: {error:?}");
}

#[then("the operation fails with invalid request {message}")]
fn the_operation_fails_with(world: &PhonebookWorld, message: String) {
    let error = world.last_error();
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), message.trim_matches('"'));
}

#[then("the operation fails as not found")]
fn the_operation_fails_as_not_found(world: &PhonebookWorld) {
    assert_eq!(world.last_error().code(), ErrorCode::NotFound);
}

#[then("the phonebook holds {count} contacts")]
fn the_phonebook_holds(world: &PhonebookWorld, count: usize) {
    let service = world.service();
    let contacts = world
        .runtime
        .block_on(async move { service.list_contacts().await })
        .expect("list should load");
    assert_eq!(contacts.len(), count);
}

#[then("the last contact can be fetched by its id")]
fn the_last_contact_can_be_fetched(world: &PhonebookWorld) {
    let service = world.service();
    let contact = world.last_contact();
    let raw_id = contact.id().to_string();
    let fetched = world
        .runtime
        .block_on(async move { service.get_contact(&raw_id).await })
        .expect("contact should be found");
    assert_eq!(fetched, contact);
}

#[then("the last contact has id {id}")]
fn the_last_contact_has_id(world: &PhonebookWorld, id: u64) {
    assert_eq!(world.last_contact().id().to_string(), id.to_string());
}

#[then("the last contact has number {number}")]
fn the_last_contact_has_number(world: &PhonebookWorld, number: String) {
    assert_eq!(world.last_contact().number().as_ref(), number);
}

#[then("the info reports {count} people")]
fn the_info_reports(world: &PhonebookWorld, count: usize) {
    let info = world.info.borrow().clone().expect("info should be recorded");
    assert_eq!(info.contact_count, count);
    assert_eq!(info.generated_at, FixedClock::fixture().0);
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Creating a contact makes it retrievable"
)]
fn creating_a_contact_makes_it_retrievable(world: PhonebookWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Duplicate names are rejected"
)]
fn duplicate_names_are_rejected(world: PhonebookWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Missing number is reported"
)]
fn missing_number_is_reported(world: PhonebookWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Badly shaped numbers are rejected"
)]
fn badly_shaped_numbers_are_rejected(world: PhonebookWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Deleted ids are never reused"
)]
fn deleted_ids_are_never_reused(world: PhonebookWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Updating keeps the identifier"
)]
fn updating_keeps_the_identifier(world: PhonebookWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Malformed identifiers are rejected"
)]
fn malformed_identifiers_are_rejected(world: PhonebookWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "Unknown identifiers are not found"
)]
fn unknown_identifiers_are_not_found(world: PhonebookWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/phonebook.feature",
    name = "The seeded phonebook reports its size"
)]
fn the_seeded_phonebook_reports_its_size(world: PhonebookWorld) {
    let _ = world;
}
