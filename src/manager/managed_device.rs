// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Internal device wrapper for the device manager.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::DeviceConfig;
use crate::device::Device;
use crate::error::Result;
use crate::event::EventBus;
use crate::state::DeviceState;

/// Connection state of a managed device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// The device has not been connected yet.
    Disconnected,
    /// Initial verification is in progress.
    Connecting,
    /// The device is reachable and being polled.
    Connected,
    /// A retry is pending after a failed verification.
    Reconnecting {
        /// The upcoming retry attempt (starting at 1).
        attempt: u32,
    },
    /// Connection gave up with an error.
    Failed(String),
}

impl ConnectionState {
    /// Returns true if the device is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Returns true if the connection gave up with an error.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Internal representation of a device in the manager.
pub(crate) struct ManagedDevice {
    /// The configured entry this device was built from.
    pub config: DeviceConfig,
    /// The driver, shared with the poll task.
    pub device: Arc<Device>,
    /// Current connection state.
    pub connection_state: ConnectionState,
    /// Watch channel carrying device state snapshots.
    pub state_tx: watch::Sender<DeviceState>,
    /// Background poll task, present while connected.
    pub poll_task: Option<JoinHandle<()>>,
}

impl ManagedDevice {
    /// Creates a managed device publishing on the shared event bus.
    pub fn new(config: DeviceConfig, events: EventBus) -> Result<Self> {
        let device = Arc::new(Device::with_event_bus(&config, events)?);
        let (state_tx, _) = watch::channel(DeviceState::new());

        Ok(Self {
            config,
            device,
            connection_state: ConnectionState::Disconnected,
            state_tx,
            poll_task: None,
        })
    }

    /// Creates a watch receiver for state snapshots.
    pub fn watch_state(&self) -> watch::Receiver<DeviceState> {
        self.state_tx.subscribe()
    }

    /// Returns true if the device is connected.
    pub fn is_connected(&self) -> bool {
        self.connection_state.is_connected()
    }

    /// Stops the background poll task, if one is running.
    pub fn abort_poll(&mut self) {
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }
    }
}

impl Drop for ManagedDevice {
    fn drop(&mut self) {
        self.abort_poll();
    }
}

impl std::fmt::Debug for ManagedDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagedDevice")
            .field("identifier", &self.config.identifier)
            .field("connection_state", &self.connection_state)
            .field("polling", &self.poll_task.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateChange;
    use crate::types::PlayerState;

    fn managed() -> ManagedDevice {
        let config = DeviceConfig::new("Player", "192.168.1.42").with_identifier("d1");
        ManagedDevice::new(config, EventBus::new()).unwrap()
    }

    #[test]
    fn new_device_is_disconnected() {
        let device = managed();

        assert!(!device.is_connected());
        assert_eq!(device.connection_state, ConnectionState::Disconnected);
        assert!(device.poll_task.is_none());
    }

    #[tokio::test]
    async fn watch_state_sees_snapshots() {
        let device = managed();
        let rx = device.watch_state();

        let mut snapshot = DeviceState::new();
        snapshot.apply(&StateChange::player(PlayerState::On));
        device.state_tx.send(snapshot).unwrap();

        assert_eq!(rx.borrow().player(), Some(PlayerState::On));
    }

    #[test]
    fn connection_state_checks() {
        assert!(ConnectionState::Connected.is_connected());
        assert!(!ConnectionState::Disconnected.is_connected());
        assert!(!ConnectionState::Connecting.is_connected());
        assert!(!ConnectionState::Reconnecting { attempt: 1 }.is_connected());

        assert!(ConnectionState::Failed("error".to_string()).is_failed());
        assert!(!ConnectionState::Connected.is_failed());
    }
}
