//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so tests can substitute mocks for the domain service.

use std::sync::Arc;

use crate::domain::ports::{ContactsCommand, ContactsQuery};

/// Dependency bundle for contact handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side: listing, lookup, and the info summary.
    pub contacts: Arc<dyn ContactsQuery>,
    /// Write side: create, replace, delete.
    pub contacts_command: Arc<dyn ContactsCommand>,
}

impl HttpState {
    /// Bundle separately supplied ports.
    pub fn new(contacts: Arc<dyn ContactsQuery>, contacts_command: Arc<dyn ContactsCommand>) -> Self {
        Self {
            contacts,
            contacts_command,
        }
    }

    /// Build state from one service implementing both ports.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use mockable::DefaultClock;
    /// use phonebook::domain::PhonebookService;
    /// use phonebook::inbound::http::state::HttpState;
    /// use phonebook::outbound::memory::InMemoryContactStore;
    ///
    /// let service = PhonebookService::new(
    ///     Arc::new(InMemoryContactStore::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let state = HttpState::from_service(Arc::new(service));
    /// # let _ = state;
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ContactsQuery + ContactsCommand + 'static,
    {
        Self {
            contacts: service.clone(),
            contacts_command: service,
        }
    }
}
