//! Driving port for phonebook reads.
//!
//! HTTP handlers use this port to list and fetch contacts without knowing
//! which store backs the phonebook.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Contact, Error};

/// Summary rendered by the info page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookInfo {
    /// Number of contacts currently stored.
    pub contact_count: usize,
    /// Moment the summary was produced.
    pub generated_at: DateTime<Utc>,
}

/// Domain use-case port for reading contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// Return all contacts.
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error>;

    /// Fetch one contact by its raw path identifier.
    ///
    /// Fails with an invalid-request error for malformed identifiers and a
    /// not-found error when nothing matches.
    async fn get_contact(&self, raw_id: &str) -> Result<Contact, Error>;

    /// Count contacts and stamp the summary with the current time.
    async fn phonebook_info(&self) -> Result<PhonebookInfo, Error>;
}
