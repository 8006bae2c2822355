use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::result::{PatternError, PatternResult};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a remote service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
    pub use_tls: bool,
}

impl ServerConfig {
    /// Start building a config for `host`.
    pub fn builder(host: impl Into<String>) -> ServerConfigBuilder {
        ServerConfigBuilder::new(host)
    }
}

/// Step-by-step builder for [`ServerConfig`].
///
/// Only the host is mandatory, every other field starts at its default.
#[derive(Debug, Clone)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            config: ServerConfig {
                host: host.into(),
                port: DEFAULT_PORT,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                use_tls: false,
            },
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn enable_tls(mut self) -> Self {
        self.config.use_tls = true;
        self
    }

    /// Finish the config.
    ///
    /// # Errors
    ///
    /// [`PatternError::MissingField`] if the host is empty.
    pub fn build(self) -> PatternResult<ServerConfig> {
        if self.config.host.trim().is_empty() {
            return Err(PatternError::MissingField("host"));
        }

        debug!(config = ?self.config, "built server config");
        Ok(self.config)
    }
}
