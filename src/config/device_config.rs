// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration for a single device entry.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfigError;
use crate::protocol::HttpConfig;

fn default_port() -> u16 {
    HttpConfig::DEFAULT_PORT
}

fn default_request_timeout_secs() -> u64 {
    HttpConfig::DEFAULT_TIMEOUT.as_secs()
}

fn default_poll_interval_secs() -> u64 {
    DeviceConfig::DEFAULT_POLL_INTERVAL.as_secs()
}

/// Configuration for one media-player device.
///
/// A driver is constructed from exactly one entry. The `identifier`, `name`
/// and `address` fields are the ones the driver exposes to the hub; the
/// remaining fields configure the HTTP transport and the poll cadence.
///
/// # Examples
///
/// ```
/// use medior_lib::config::DeviceConfig;
///
/// let config = DeviceConfig::new("Living Room Player", "192.168.1.42")
///     .with_port(8080)
///     .with_credentials("admin", "secret");
///
/// assert_eq!(config.name, "Living Room Player");
/// assert_eq!(config.address, "192.168.1.42");
/// assert!(!config.identifier.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Unique identifier of the device entry.
    pub identifier: String,
    /// User-facing device name.
    pub name: String,
    /// Hostname or IP address of the device.
    pub address: String,
    /// HTTP port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whether to use HTTPS.
    #[serde(default)]
    pub use_https: bool,
    /// Optional (username, password) for device authentication.
    #[serde(default)]
    pub credentials: Option<(String, String)>,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Interval between background state polls, in seconds.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl DeviceConfig {
    /// Default interval between background state polls.
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

    /// Creates a configuration with a generated identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            identifier: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            address: address.into(),
            port: default_port(),
            use_https: false,
            credentials: None,
            request_timeout_secs: default_request_timeout_secs(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }

    /// Sets an explicit identifier (e.g. a device serial number).
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Sets a custom HTTP port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        self
    }

    /// Sets authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_secs = timeout.as_secs();
        self
    }

    /// Sets the background poll interval.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_secs = interval.as_secs();
        self
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the poll interval as a [`Duration`].
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Validates the entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEntry` if the identifier or address is
    /// empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identifier.trim().is_empty() {
            return Err(ConfigError::InvalidEntry(
                "identifier must not be empty".to_string(),
            ));
        }
        if self.address.trim().is_empty() {
            return Err(ConfigError::InvalidEntry(format!(
                "device {} has an empty address",
                self.identifier
            )));
        }
        Ok(())
    }

    /// Builds the HTTP transport configuration for this entry.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        let mut config = HttpConfig::new(self.address.clone())
            .with_port(self.port)
            .with_timeout(self.request_timeout());

        if self.use_https {
            config = config.with_https();
        }

        if let Some((username, password)) = &self.credentials {
            config = config.with_credentials(username.clone(), password.clone());
        }

        config
    }
}
