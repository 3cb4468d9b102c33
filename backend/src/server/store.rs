//! Contact store selection at startup.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::ContactStore;
use crate::outbound::memory::{InMemoryContactStore, sample_contacts};
use crate::outbound::persistence::{DbPool, DieselContactStore, PoolConfig, apply_migrations};
use crate::settings::PhonebookSettings;

/// Build the store named by `settings`.
///
/// A configured database URL selects PostgreSQL: migrations are applied and a
/// pool is opened before the store is returned. Without one, an in-memory
/// store is created, seeded with the sample contacts when enabled.
///
/// # Errors
///
/// Returns [`std::io::Error`] when migrations fail or the pool cannot be
/// built.
pub async fn build_contact_store(
    settings: &PhonebookSettings,
) -> std::io::Result<Arc<dyn ContactStore>> {
    match settings.database_url() {
        Some(url) => {
            apply_migrations(url).await.map_err(std::io::Error::other)?;
            let config = PoolConfig::new(url).with_connection_timeout(settings.database_timeout());
            let pool = DbPool::new(config).await.map_err(std::io::Error::other)?;
            info!(store = "postgres", "contact store ready");
            Ok(Arc::new(DieselContactStore::new(pool)))
        }
        None => {
            let store = if settings.seed_contacts {
                let samples = sample_contacts().map_err(std::io::Error::other)?;
                InMemoryContactStore::seeded(samples)
            } else {
                InMemoryContactStore::new()
            };
            info!(
                store = "memory",
                seeded = settings.seed_contacts,
                "contact store ready"
            );
            Ok(Arc::new(store))
        }
    }
}
