//! Helpers shared by unit and integration tests.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature.

use std::sync::Arc;

use actix_web::web;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::ContactStore;
use crate::inbound::http::health::HealthState;
use crate::server::AppDependencies;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// `2026-03-14T09:26:53Z`.
    pub fn fixture() -> Self {
        Self(
            Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
                .single()
                .unwrap_or_default(),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Application dependencies over `store` with a ready health state and the
/// fixture clock.
pub fn app_dependencies(store: Arc<dyn ContactStore>) -> AppDependencies {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    AppDependencies::new(health_state, store, Arc::new(FixedClock::fixture()))
}
