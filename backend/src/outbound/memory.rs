//! Volatile in-process contact store.
//!
//! Contacts live in a `BTreeMap` keyed by sequence number, guarded by a single
//! mutex together with the id counter. Every operation takes the lock once,
//! so the duplicate-name check and the insert of a create are atomic. The
//! counter only moves forward; deleted ids are never handed out again.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{ContactStore, ContactStoreError};
use crate::domain::{
    Contact, ContactDraft, ContactId, ContactName, ContactValidationError, IdFormat, PhoneNumber,
};

/// Sample entries loaded when seeding is enabled.
const SAMPLE_CONTACTS: [(&str, &str); 4] = [
    ("Arto Hellas", "040-123456"),
    ("Ada Lovelace", "39-445323523"),
    ("Dan Abramov", "12-43234345"),
    ("Mary Poppendieck", "39-236423122"),
];

/// Validated drafts for the bundled sample contacts.
///
/// # Errors
///
/// Fails only if a sample entry breaks the contact field rules.
pub fn sample_contacts() -> Result<Vec<ContactDraft>, ContactValidationError> {
    SAMPLE_CONTACTS
        .iter()
        .map(|(name, number)| -> Result<ContactDraft, ContactValidationError> {
            Ok(ContactDraft::new(
                ContactName::new(*name)?,
                PhoneNumber::new(*number)?,
            ))
        })
        .collect()
}

#[derive(Debug)]
struct Inner {
    contacts: BTreeMap<u64, Contact>,
    next_id: u64,
}

impl Inner {
    fn insert(&mut self, draft: &ContactDraft) -> Result<Contact, ContactStoreError> {
        if self.contacts.values().any(|c| c.name() == draft.name()) {
            return Err(ContactStoreError::duplicate_name(draft.name().as_ref()));
        }
        let id = self.next_id;
        self.next_id += 1;
        let contact = Contact::new(ContactId::Sequence(id), draft.clone());
        self.contacts.insert(id, contact.clone());
        Ok(contact)
    }
}

/// Contact store held entirely in memory; contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryContactStore {
    inner: Mutex<Inner>,
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContactStore {
    /// Create an empty store whose first id is `1`.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                contacts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with `drafts`, in order.
    ///
    /// Drafts whose name is already present are skipped.
    pub fn seeded(drafts: impl IntoIterator<Item = ContactDraft>) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.lock() {
            for draft in drafts {
                if let Err(error) = inner.insert(&draft) {
                    warn!(%error, "skipping seed contact");
                }
            }
        }
        store
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, ContactStoreError> {
        self.inner
            .lock()
            .map_err(|_| ContactStoreError::query("contact store lock poisoned"))
    }
}

fn sequence(id: &ContactId) -> Option<u64> {
    match id {
        ContactId::Sequence(value) => Some(*value),
        ContactId::Document(_) => None,
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    fn id_format(&self) -> IdFormat {
        IdFormat::Sequence
    }

    async fn list(&self) -> Result<Vec<Contact>, ContactStoreError> {
        Ok(self.lock()?.contacts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactStoreError> {
        let Some(key) = sequence(id) else {
            return Ok(None);
        };
        Ok(self.lock()?.contacts.get(&key).cloned())
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, ContactStoreError> {
        self.lock()?.insert(draft)
    }

    async fn update(
        &self,
        id: &ContactId,
        draft: &ContactDraft,
    ) -> Result<Option<Contact>, ContactStoreError> {
        let Some(key) = sequence(id) else {
            return Ok(None);
        };
        let mut inner = self.lock()?;
        Ok(inner.contacts.get_mut(&key).map(|contact| {
            contact.replace(draft.clone());
            contact.clone()
        }))
    }

    async fn delete(&self, id: &ContactId) -> Result<(), ContactStoreError> {
        if let Some(key) = sequence(id) {
            self.lock()?.contacts.remove(&key);
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, ContactStoreError> {
        Ok(self.lock()?.contacts.len())
    }
}
