//! Phonebook domain service implementing the contact driving ports.
//!
//! The service parses identifiers for whichever store is active, runs the
//! shared field validation, and maps store failures onto [`Error`] so inbound
//! adapters never see persistence details.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::warn;

use crate::domain::ports::{
    ContactPayload, ContactStore, ContactStoreError, ContactsCommand, ContactsQuery, PhonebookInfo,
};
use crate::domain::{Contact, ContactDraft, ContactId, ContactValidationError, Error};

/// Message returned when a create collides with an existing name.
pub const DUPLICATE_NAME_MESSAGE: &str = "name must be unique";

/// Contact service backed by a single [`ContactStore`].
pub struct PhonebookService<S: ?Sized> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S: ?Sized> Clone for PhonebookService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S: ?Sized> PhonebookService<S> {
    /// Create a service over the given store.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use phonebook::domain::PhonebookService;
    /// use phonebook::outbound::memory::InMemoryContactStore;
    ///
    /// let service = PhonebookService::new(
    ///     Arc::new(InMemoryContactStore::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

impl<S> PhonebookService<S>
where
    S: ContactStore + ?Sized,
{
    fn map_store_error(error: ContactStoreError) -> Error {
        match error {
            ContactStoreError::Connection { message } => {
                warn!(%message, "contact store unavailable");
                Error::internal(format!("contact store unavailable: {message}"))
            }
            ContactStoreError::Query { message } => {
                Error::internal(format!("contact store error: {message}"))
            }
            ContactStoreError::DuplicateName { .. } => Error::conflict(DUPLICATE_NAME_MESSAGE),
        }
    }

    fn invalid(error: ContactValidationError) -> Error {
        Error::invalid_request(error.to_string())
    }

    fn parse_id(&self, raw_id: &str) -> Result<ContactId, Error> {
        self.store.id_format().parse(raw_id).map_err(Self::invalid)
    }

    fn draft(payload: &ContactPayload) -> Result<ContactDraft, Error> {
        ContactDraft::try_from_parts(payload.name.as_deref(), payload.number.as_deref())
            .map_err(Self::invalid)
    }

    fn not_found(id: &ContactId) -> Error {
        Error::not_found(format!("contact {id} not found"))
    }
}

#[async_trait]
impl<S> ContactsQuery for PhonebookService<S>
where
    S: ContactStore + ?Sized,
{
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error> {
        self.store.list().await.map_err(Self::map_store_error)
    }

    async fn get_contact(&self, raw_id: &str) -> Result<Contact, Error> {
        let id = self.parse_id(raw_id)?;
        self.store
            .find_by_id(&id)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Self::not_found(&id))
    }

    async fn phonebook_info(&self) -> Result<PhonebookInfo, Error> {
        let contact_count = self.store.count().await.map_err(Self::map_store_error)?;
        Ok(PhonebookInfo {
            contact_count,
            generated_at: self.clock.utc(),
        })
    }
}

#[async_trait]
impl<S> ContactsCommand for PhonebookService<S>
where
    S: ContactStore + ?Sized,
{
    async fn create_contact(&self, payload: ContactPayload) -> Result<Contact, Error> {
        let draft = Self::draft(&payload)?;
        self.store
            .create(&draft)
            .await
            .map_err(Self::map_store_error)
    }

    async fn update_contact(
        &self,
        raw_id: &str,
        payload: ContactPayload,
    ) -> Result<Contact, Error> {
        let id = self.parse_id(raw_id)?;
        let draft = Self::draft(&payload)?;
        self.store
            .update(&id, &draft)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Self::not_found(&id))
    }

    async fn delete_contact(&self, raw_id: &str) -> Result<(), Error> {
        let id = self.parse_id(raw_id)?;
        self.store.delete(&id).await.map_err(Self::map_store_error)
    }
}

#[cfg(test)]
#[path = "phonebook_service_tests.rs"]
mod tests;
