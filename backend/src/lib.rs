//! Phonebook REST service library.
//!
//! Layout follows a ports-and-adapters split:
//! - [`domain`]: contacts, field rules, ports, and the phonebook service
//! - [`inbound`]: actix-web handlers
//! - [`outbound`]: in-memory and PostgreSQL contact stores
//! - [`server`]: store selection and application assembly

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use doc::ApiDoc;
pub use middleware::Trace;
