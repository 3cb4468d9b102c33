//! Driven port for contact persistence adapters and their errors.
//!
//! Implementations own the authoritative contact collection. They receive
//! only validated drafts and must make the duplicate-name check and the insert
//! of [`ContactStore::create`] atomic with respect to other creates.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft, ContactId, IdFormat};

/// Persistence errors raised by contact store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactStoreError {
    /// The store could not be reached.
    #[error("contact store connection failed: {message}")]
    Connection {
        /// Driver or pool message.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("contact store query failed: {message}")]
    Query {
        /// Driver message or the broken row invariant.
        message: String,
    },
    /// A contact with the same name already exists.
    #[error("a contact named {name} already exists")]
    DuplicateName {
        /// The rejected name.
        name: String,
    },
}

impl ContactStoreError {
    /// Construct a [`ContactStoreError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct a [`ContactStoreError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Construct a [`ContactStoreError::DuplicateName`].
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }
}

/// Authoritative CRUD over contact records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Shape of the identifiers this store issues.
    fn id_format(&self) -> IdFormat;

    /// Return every stored contact in a stable order.
    async fn list(&self) -> Result<Vec<Contact>, ContactStoreError>;

    /// Fetch a contact by identifier.
    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactStoreError>;

    /// Assign a fresh identifier and insert the draft.
    ///
    /// Fails with [`ContactStoreError::DuplicateName`] when the name is taken.
    async fn create(&self, draft: &ContactDraft) -> Result<Contact, ContactStoreError>;

    /// Replace name and number of an existing contact.
    ///
    /// Returns `Ok(None)` when no contact has the identifier. Names are not
    /// re-checked for uniqueness.
    async fn update(
        &self,
        id: &ContactId,
        draft: &ContactDraft,
    ) -> Result<Option<Contact>, ContactStoreError>;

    /// Remove a contact. Removing an absent identifier succeeds.
    async fn delete(&self, id: &ContactId) -> Result<(), ContactStoreError>;

    /// Number of stored contacts.
    async fn count(&self) -> Result<usize, ContactStoreError>;
}
