//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::ContactStore;

/// Everything [`super::create_server`] needs besides health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Arc<dyn ContactStore>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Serve `store` on `bind_addr` using the system clock.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: Arc<dyn ContactStore>) -> Self {
        Self {
            bind_addr,
            store,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Replace the clock used for the info page timestamp.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Address the listener binds.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
