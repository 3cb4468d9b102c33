//! Domain primitives, ports, and services.
//!
//! Purpose: define the contact entity, its field rules, and the use-case
//! service that sits between inbound adapters and contact stores. Types keep
//! their invariants behind validating constructors and document their serde
//! contracts in Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error category.
//! - Contact, ContactDraft, ContactId: the phonebook entry and its parts.
//! - PhonebookService: implements the driving ports over a contact store.

pub mod contact;
pub mod error;
pub mod phonebook_service;
pub mod ports;

pub use self::contact::{
    Contact, ContactDraft, ContactId, ContactName, ContactValidationError, IdFormat, NAME_MIN,
    NUMBER_MIN, PhoneNumber,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::phonebook_service::{DUPLICATE_NAME_MESSAGE, PhonebookService};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use phonebook::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("nope"))
/// }
/// # assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
