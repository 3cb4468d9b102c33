//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`ContactsQuery`], [`ContactsCommand`]) are called by
//! inbound adapters; the driven port ([`ContactStore`]) is implemented by the
//! in-memory and PostgreSQL adapters.

mod contact_store;
mod contacts_command;
mod contacts_query;

#[cfg(test)]
pub use contact_store::MockContactStore;
pub use contact_store::{ContactStore, ContactStoreError};
#[cfg(test)]
pub use contacts_command::MockContactsCommand;
pub use contacts_command::{ContactPayload, ContactsCommand};
#[cfg(test)]
pub use contacts_query::MockContactsQuery;
pub use contacts_query::{ContactsQuery, PhonebookInfo};
