//! Outbound adapters implementing the contact store port.
//!
//! - **memory**: volatile store used when no database is configured
//! - **persistence**: PostgreSQL store using Diesel ORM
//!
//! Adapters translate between domain types and storage representations and
//! hold no business rules beyond what the port contract requires.

pub mod memory;
pub mod persistence;
