//! Driving port for phonebook writes.

use async_trait::async_trait;

use crate::domain::{Contact, Error};

/// Unvalidated contact fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPayload {
    /// Name as sent, or `None` when absent.
    pub name: Option<String>,
    /// Number as sent, or `None` when absent.
    pub number: Option<String>,
}

impl ContactPayload {
    /// Build a payload with both fields present.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }
}

/// Domain use-case port for creating, replacing, and deleting contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Validate the payload and add a contact with a unique name.
    async fn create_contact(&self, payload: ContactPayload) -> Result<Contact, Error>;

    /// Validate the payload and replace the contact's name and number.
    async fn update_contact(&self, raw_id: &str, payload: ContactPayload)
    -> Result<Contact, Error>;

    /// Delete a contact. Unknown but well-formed identifiers succeed.
    async fn delete_contact(&self, raw_id: &str) -> Result<(), Error>;
}
