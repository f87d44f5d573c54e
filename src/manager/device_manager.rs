// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device manager for coordinating multiple drivers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, broadcast, watch};
use tokio::time::MissedTickBehavior;

use crate::MediaPlayerAttributes;
use crate::config::{ConfigStore, DeviceConfig};
use crate::device::{CommandArgs, Device};
use crate::error::{ConfigError, Error, Result};
use crate::event::{DeviceEvent, EventBus};
use crate::state::DeviceState;

use super::managed_device::{ConnectionState, ManagedDevice};
use super::reconnection::ReconnectionPolicy;

/// Manager for coordinating multiple media-player drivers.
///
/// The manager constructs one [`Device`] per configured entry, verifies
/// connectivity with retry/backoff, keeps every connected device polled in
/// the background, and distributes all device events through a single
/// broadcast channel.
///
/// # Examples
///
/// ```no_run
/// use medior_lib::config::DeviceConfig;
/// use medior_lib::manager::DeviceManager;
///
/// # async fn example() -> medior_lib::Result<()> {
/// let manager = DeviceManager::new();
///
/// let config = DeviceConfig::new("Living Room Player", "192.168.1.42");
/// let identifier = manager.add_device(config).await?;
///
/// manager.connect(&identifier).await?;
/// manager.power_on(&identifier).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeviceManager {
    /// Managed devices, keyed by configured identifier.
    devices: Arc<RwLock<HashMap<String, ManagedDevice>>>,
    /// Event bus shared with every driver.
    event_bus: EventBus,
    /// Retry policy for initial connection.
    reconnection: ReconnectionPolicy,
}

impl DeviceManager {
    /// Creates a new device manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            devices: Arc::new(RwLock::new(HashMap::new())),
            event_bus: EventBus::new(),
            reconnection: ReconnectionPolicy::default(),
        }
    }

    /// Creates a new device manager with custom event bus capacity.
    #[must_use]
    pub fn with_capacity(event_capacity: usize) -> Self {
        Self {
            devices: Arc::new(RwLock::new(HashMap::new())),
            event_bus: EventBus::with_capacity(event_capacity),
            reconnection: ReconnectionPolicy::default(),
        }
    }

    /// Sets the retry policy used by [`connect`](Self::connect).
    #[must_use]
    pub fn with_reconnection_policy(mut self, policy: ReconnectionPolicy) -> Self {
        self.reconnection = policy;
        self
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribes to events of all managed devices.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DeviceEvent> {
        self.event_bus.subscribe()
    }

    /// Returns the number of active event subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.event_bus.subscriber_count()
    }

    // =========================================================================
    // Device Management
    // =========================================================================

    /// Adds a device from a configured entry.
    ///
    /// Returns the device identifier and emits [`DeviceEvent::DeviceAdded`].
    ///
    /// # Errors
    ///
    /// Returns error if the identifier is already managed or the entry is
    /// invalid.
    pub async fn add_device(&self, config: DeviceConfig) -> Result<String> {
        let identifier = config.identifier.clone();

        {
            let mut devices = self.devices.write().await;
            if devices.contains_key(&identifier) {
                return Err(Error::Config(ConfigError::DuplicateDevice(identifier)));
            }
            let managed = ManagedDevice::new(config, self.event_bus.clone())?;
            devices.insert(identifier.clone(), managed);
        }

        tracing::info!(identifier = %identifier, "Device added");
        self.event_bus
            .publish(DeviceEvent::device_added(identifier.clone()));
        Ok(identifier)
    }

    /// Adds every entry of a configuration store.
    ///
    /// Invalid entries are logged and skipped. Returns the identifiers that
    /// were added.
    pub async fn add_from_store(&self, store: &ConfigStore) -> Vec<String> {
        let mut added = Vec::new();

        for config in store.all() {
            let identifier = config.identifier.clone();
            match self.add_device(config).await {
                Ok(id) => added.push(id),
                Err(err) => {
                    tracing::warn!(identifier = %identifier, error = %err, "Skipping configured device");
                }
            }
        }

        added
    }

    /// Removes a device, stopping its poll task.
    ///
    /// Returns `true` if the device existed.
    pub async fn remove_device(&self, identifier: &str) -> bool {
        let removed = self.devices.write().await.remove(identifier);

        match removed {
            Some(mut managed) => {
                managed.abort_poll();
                tracing::info!(identifier = %identifier, "Device removed");
                self.event_bus
                    .publish(DeviceEvent::device_removed(identifier));
                true
            }
            None => false,
        }
    }

    /// Returns the identifiers of all managed devices.
    pub async fn identifiers(&self) -> Vec<String> {
        self.devices.read().await.keys().cloned().collect()
    }

    /// Returns the number of managed devices.
    pub async fn device_count(&self) -> usize {
        self.devices.read().await.len()
    }

    // =========================================================================
    // Connection Management
    // =========================================================================

    /// Connects a device: verifies reachability (with the configured retry
    /// policy) and starts the background poll task.
    ///
    /// Emits [`DeviceEvent::ConnectionChanged`] on the outcome.
    ///
    /// # Errors
    ///
    /// Returns error if the device is unknown or verification keeps failing
    /// after all retries.
    pub async fn connect(&self, identifier: &str) -> Result<()> {
        let device = self.device_arc(identifier).await?;
        self.set_connection_state(identifier, ConnectionState::Connecting)
            .await;

        let mut attempt: u32 = 0;
        loop {
            match device.verify_connection().await {
                Ok(()) => break,
                Err(err) if self.reconnection.should_retry(attempt) => {
                    let delay = self.reconnection.delay_for_attempt(attempt);
                    attempt += 1;
                    tracing::warn!(
                        identifier = %identifier,
                        error = %err,
                        attempt,
                        "Connection failed, retrying"
                    );
                    self.set_connection_state(
                        identifier,
                        ConnectionState::Reconnecting { attempt },
                    )
                    .await;
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    self.set_connection_state(identifier, ConnectionState::Failed(err.to_string()))
                        .await;
                    device.mark_unavailable();
                    self.event_bus
                        .publish(DeviceEvent::disconnected_with_error(
                            identifier,
                            err.to_string(),
                        ));
                    return Err(err);
                }
            }
        }

        {
            let mut devices = self.devices.write().await;
            let Some(managed) = devices.get_mut(identifier) else {
                return Err(Error::DeviceNotFound(identifier.to_string()));
            };

            managed.abort_poll();
            managed.connection_state = ConnectionState::Connected;
            let _ = managed.state_tx.send(device.device_state());

            managed.poll_task = Some(tokio::spawn(poll_loop(
                identifier.to_string(),
                Arc::clone(&device),
                managed.state_tx.clone(),
                Arc::clone(&self.devices),
                self.event_bus.clone(),
                managed.config.poll_interval(),
            )));
        }

        self.event_bus.publish(DeviceEvent::connected(identifier));
        Ok(())
    }

    /// Disconnects a device, stopping its poll task.
    ///
    /// # Errors
    ///
    /// Returns error if the device is unknown.
    pub async fn disconnect(&self, identifier: &str) -> Result<()> {
        {
            let mut devices = self.devices.write().await;
            let managed = devices
                .get_mut(identifier)
                .ok_or_else(|| Error::DeviceNotFound(identifier.to_string()))?;
            managed.abort_poll();
            managed.connection_state = ConnectionState::Disconnected;
        }

        self.event_bus
            .publish(DeviceEvent::disconnected(identifier));
        Ok(())
    }

    /// Disconnects all devices.
    pub async fn shutdown(&self) {
        let identifiers: Vec<String> = {
            let mut devices = self.devices.write().await;
            for managed in devices.values_mut() {
                managed.abort_poll();
                managed.connection_state = ConnectionState::Disconnected;
            }
            devices.keys().cloned().collect()
        };

        for identifier in identifiers {
            self.event_bus
                .publish(DeviceEvent::disconnected(identifier));
        }
    }

    /// Returns the connection state of a device.
    pub async fn connection_state(&self, identifier: &str) -> Option<ConnectionState> {
        self.devices
            .read()
            .await
            .get(identifier)
            .map(|managed| managed.connection_state.clone())
    }

    /// Returns true if the device is connected.
    pub async fn is_connected(&self, identifier: &str) -> bool {
        self.devices
            .read()
            .await
            .get(identifier)
            .is_some_and(ManagedDevice::is_connected)
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// Returns a snapshot of a device's tracked state.
    pub async fn get_state(&self, identifier: &str) -> Option<DeviceState> {
        self.devices
            .read()
            .await
            .get(identifier)
            .map(|managed| managed.device.device_state())
    }

    /// Returns the current attribute bag of a device.
    pub async fn attributes(&self, identifier: &str) -> Option<MediaPlayerAttributes> {
        self.devices
            .read()
            .await
            .get(identifier)
            .map(|managed| managed.device.get_device_attributes(identifier))
    }

    /// Returns a watch receiver with state snapshots of a device.
    pub async fn watch_device(&self, identifier: &str) -> Option<watch::Receiver<DeviceState>> {
        self.devices
            .read()
            .await
            .get(identifier)
            .map(ManagedDevice::watch_state)
    }

    // =========================================================================
    // Device Control
    // =========================================================================

    /// Turns a device on.
    ///
    /// # Errors
    ///
    /// Returns error if the device is unknown, not connected, or the command
    /// fails.
    pub async fn power_on(&self, identifier: &str) -> Result<()> {
        let device = self.connected_device(identifier).await?;
        device.power_on().await?;
        self.push_snapshot(identifier).await;
        Ok(())
    }

    /// Turns a device off.
    ///
    /// # Errors
    ///
    /// Returns error if the device is unknown, not connected, or the command
    /// fails.
    pub async fn power_off(&self, identifier: &str) -> Result<()> {
        let device = self.connected_device(identifier).await?;
        device.power_off().await?;
        self.push_snapshot(identifier).await;
        Ok(())
    }

    /// Toggles a device's power.
    ///
    /// # Errors
    ///
    /// Returns error if the device is unknown, not connected, or the command
    /// fails.
    pub async fn power_toggle(&self, identifier: &str) -> Result<()> {
        let device = self.connected_device(identifier).await?;
        device.power_toggle().await?;
        self.push_snapshot(identifier).await;
        Ok(())
    }

    /// Routes a hub command to a device.
    ///
    /// # Errors
    ///
    /// Returns error if the device is unknown, not connected, the command is
    /// unknown, or execution fails.
    pub async fn send_command(
        &self,
        identifier: &str,
        command: &str,
        args: &CommandArgs,
    ) -> Result<()> {
        let device = self.connected_device(identifier).await?;
        device.send_command(command, args).await?;
        self.push_snapshot(identifier).await;
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn device_arc(&self, identifier: &str) -> Result<Arc<Device>> {
        self.devices
            .read()
            .await
            .get(identifier)
            .map(|managed| Arc::clone(&managed.device))
            .ok_or_else(|| Error::DeviceNotFound(identifier.to_string()))
    }

    async fn connected_device(&self, identifier: &str) -> Result<Arc<Device>> {
        let devices = self.devices.read().await;
        let managed = devices
            .get(identifier)
            .ok_or_else(|| Error::DeviceNotFound(identifier.to_string()))?;

        if !managed.is_connected() {
            return Err(Error::NotConnected);
        }

        Ok(Arc::clone(&managed.device))
    }

    async fn set_connection_state(&self, identifier: &str, state: ConnectionState) {
        if let Some(managed) = self.devices.write().await.get_mut(identifier) {
            managed.connection_state = state;
        }
    }

    async fn push_snapshot(&self, identifier: &str) {
        if let Some(managed) = self.devices.read().await.get(identifier) {
            let _ = managed.state_tx.send(managed.device.device_state());
        }
    }
}

impl Default for DeviceManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Background poll loop for one connected device.
///
/// Re-verifies the device at the configured interval. On the first failure
/// the device is marked unavailable and a disconnection event is emitted;
/// polling keeps going, and the first success after a failure emits a
/// reconnection event.
async fn poll_loop(
    identifier: String,
    device: Arc<Device>,
    state_tx: watch::Sender<DeviceState>,
    devices: Arc<RwLock<HashMap<String, ManagedDevice>>>,
    events: EventBus,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; connect() has just verified.
    ticker.tick().await;

    let mut healthy = true;
    let mut failures: u32 = 0;

    loop {
        ticker.tick().await;

        match device.verify_connection().await {
            Ok(()) => {
                if !healthy {
                    healthy = true;
                    failures = 0;
                    set_state(&devices, &identifier, ConnectionState::Connected).await;
                    events.publish(DeviceEvent::connected(identifier.clone()));
                    tracing::info!(identifier = %identifier, "Device reachable again");
                }
                let _ = state_tx.send(device.device_state());
            }
            Err(err) => {
                failures += 1;
                if healthy {
                    healthy = false;
                    device.mark_unavailable();
                    events.publish(DeviceEvent::disconnected_with_error(
                        identifier.clone(),
                        err.to_string(),
                    ));
                }
                set_state(
                    &devices,
                    &identifier,
                    ConnectionState::Reconnecting { attempt: failures },
                )
                .await;
                let _ = state_tx.send(device.device_state());
                tracing::warn!(identifier = %identifier, error = %err, failures, "Poll failed");
            }
        }
    }
}

async fn set_state(
    devices: &Arc<RwLock<HashMap<String, ManagedDevice>>>,
    identifier: &str,
    state: ConnectionState,
) {
    if let Some(managed) = devices.write().await.get_mut(identifier) {
        managed.connection_state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerState;

    fn offline_config(identifier: &str) -> DeviceConfig {
        // Port 1 on localhost refuses connections immediately
        DeviceConfig::new("Player", "127.0.0.1")
            .with_identifier(identifier)
            .with_port(1)
            .with_request_timeout(Duration::from_secs(1))
    }

    #[tokio::test]
    async fn add_and_remove_device() {
        let manager = DeviceManager::new();
        let mut events = manager.subscribe();

        let id = manager.add_device(offline_config("d1")).await.unwrap();
        assert_eq!(id, "d1");
        assert_eq!(manager.device_count().await, 1);
        assert_eq!(
            events.recv().await.unwrap(),
            DeviceEvent::device_added("d1")
        );

        assert!(manager.remove_device("d1").await);
        assert_eq!(manager.device_count().await, 0);
        assert_eq!(
            events.recv().await.unwrap(),
            DeviceEvent::device_removed("d1")
        );

        assert!(!manager.remove_device("d1").await);
    }

    #[tokio::test]
    async fn duplicate_identifier_is_rejected() {
        let manager = DeviceManager::new();
        manager.add_device(offline_config("d1")).await.unwrap();

        let result = manager.add_device(offline_config("d1")).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::DuplicateDevice(_)))
        ));
    }

    #[tokio::test]
    async fn connect_unknown_device() {
        let manager = DeviceManager::new();
        let result = manager.connect("ghost").await;
        assert!(matches!(result, Err(Error::DeviceNotFound(_))));
    }

    #[tokio::test]
    async fn commands_require_connection() {
        let manager = DeviceManager::new();
        manager.add_device(offline_config("d1")).await.unwrap();

        assert!(matches!(
            manager.power_on("d1").await,
            Err(Error::NotConnected)
        ));
        assert!(matches!(
            manager.power_on("ghost").await,
            Err(Error::DeviceNotFound(_))
        ));
    }

    #[tokio::test]
    async fn failed_connect_marks_device_unavailable() {
        let manager =
            DeviceManager::new().with_reconnection_policy(ReconnectionPolicy::disabled());
        manager.add_device(offline_config("d1")).await.unwrap();
        let mut events = manager.subscribe();

        assert!(manager.connect("d1").await.is_err());

        assert!(matches!(
            manager.connection_state("d1").await,
            Some(ConnectionState::Failed(_))
        ));
        assert!(!manager.is_connected("d1").await);

        let state = manager.get_state("d1").await.unwrap();
        assert_eq!(state.player(), Some(PlayerState::Unavailable));

        // Unavailability produced an attribute update and a connection event
        let mut saw_update = false;
        let mut saw_disconnect = false;
        while let Ok(event) = events.try_recv() {
            saw_update |= event.is_update();
            saw_disconnect |= event.is_connection();
        }
        assert!(saw_update);
        assert!(saw_disconnect);
    }

    #[tokio::test]
    async fn attributes_lookup() {
        let manager = DeviceManager::new();
        manager.add_device(offline_config("d1")).await.unwrap();

        let attrs = manager.attributes("d1").await.unwrap();
        assert!(attrs.is_empty());
        assert!(manager.attributes("ghost").await.is_none());
    }
}
