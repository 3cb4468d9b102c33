//! PostgreSQL persistence for contacts using Diesel ORM.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module; only [`DieselContactStore`], the pool, and the migration
//! entry point are exported.
//!
//! ```no_run
//! use phonebook::outbound::persistence::{
//!     DbPool, DieselContactStore, PoolConfig, apply_migrations,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/phonebook";
//! apply_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let store = DieselContactStore::new(pool);
//! # let _ = store;
//! # Ok(())
//! # }
//! ```

mod diesel_contact_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contact_store::DieselContactStore;
pub use migrations::{MigrationError, apply_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
