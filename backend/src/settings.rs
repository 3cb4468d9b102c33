//! Service configuration loaded via OrthoConfig.
//!
//! Values merge, lowest precedence first: defaults, configuration file,
//! `PHONEBOOK_*` environment variables, command-line flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_DB_TIMEOUT_SECS: u64 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid bind host {host:?}: {message}")]
    InvalidHost {
        /// Host as configured.
        host: String,
        /// Parser message.
        message: String,
    },
}

/// Runtime settings for the phonebook service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PHONEBOOK")]
pub struct PhonebookSettings {
    /// TCP port to listen on.
    #[ortho_config(default = 3001)]
    pub port: u16,
    /// Address to bind; all interfaces when unset.
    pub host: Option<String>,
    /// PostgreSQL connection string. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Seconds to wait for a pooled database connection.
    pub database_timeout_secs: Option<u64>,
    /// Load the sample contacts into the in-memory store at startup.
    #[ortho_config(default = true)]
    pub seed_contacts: bool,
}

impl PhonebookSettings {
    /// Socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(host) => host.parse().map_err(|err: std::net::AddrParseError| {
                SettingsError::InvalidHost {
                    host: host.to_owned(),
                    message: err.to_string(),
                }
            })?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool checkout timeout.
    pub fn database_timeout(&self) -> Duration {
        Duration::from_secs(
            self.database_timeout_secs
                .unwrap_or(DEFAULT_DB_TIMEOUT_SECS),
        )
    }
}

impl Default for PhonebookSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: None,
            database_url: None,
            database_timeout_secs: None,
            seed_contacts: true,
        }
    }
}
