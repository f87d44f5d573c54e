// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The media-player device driver.
//!
//! A [`Device`] wraps one configured device entry and handles all
//! communication with the physical device. The device is stateless over
//! HTTP: every operation is an independent request, and the driver keeps the
//! last confirmed state so the hub always has something current to display.
//!
//! # State tracking
//!
//! The driver holds a single [`DeviceState`] as the source of truth. The
//! [`state`](Device::state) property and the attribute bag returned by
//! [`get_device_attributes`](Device::get_device_attributes) are both derived
//! from it, so the reported entity state can never disagree with the
//! reported attributes. Whenever applying a confirmed reply actually changes
//! the state, the driver publishes a [`DeviceEvent::Update`] on its event
//! bus.
//!
//! # Examples
//!
//! ```no_run
//! use medior_lib::config::DeviceConfig;
//! use medior_lib::Device;
//!
//! # async fn example() -> medior_lib::Result<()> {
//! let config = DeviceConfig::new("Living Room Player", "192.168.1.42");
//! let device = Device::from_config(&config)?;
//!
//! let _events = device.subscribe();
//!
//! device.verify_connection().await?;
//! device.power_on().await?;
//! # Ok(())
//! # }
//! ```

mod router;

pub use router::CommandArgs;

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use crate::command::{Command, MuteCommand, PowerCommand, SourceCommand, StatusCommand, VolumeCommand};
use crate::config::DeviceConfig;
use crate::error::{Error, Result};
use crate::event::{DeviceEvent, EventBus};
use crate::protocol::{CommandResponse, HttpClient, Protocol};
use crate::response::{MuteResponse, PowerResponse, SourceResponse, StatusResponse, VolumeResponse};
use crate::state::{DeviceState, StateChange};
use crate::types::{PlayerState, Volume};
use crate::MediaPlayerAttributes;

/// Driver for one stateless HTTP media-player device.
#[derive(Debug)]
pub struct Device {
    config: DeviceConfig,
    client: HttpClient,
    state: Arc<RwLock<DeviceState>>,
    events: EventBus,
}

impl Device {
    /// Creates a driver from a configured device entry with its own event
    /// bus.
    ///
    /// No network traffic happens here; the first contact with the device is
    /// [`verify_connection`](Self::verify_connection).
    ///
    /// # Errors
    ///
    /// Returns error if the entry is invalid or the HTTP client cannot be
    /// created.
    pub fn from_config(config: &DeviceConfig) -> Result<Self> {
        Self::with_event_bus(config, EventBus::new())
    }

    /// Creates a driver publishing on a shared event bus.
    ///
    /// The manager uses this so all drivers report through one channel.
    ///
    /// # Errors
    ///
    /// Returns error if the entry is invalid or the HTTP client cannot be
    /// created.
    pub fn with_event_bus(config: &DeviceConfig, events: EventBus) -> Result<Self> {
        config.validate().map_err(Error::Config)?;
        let client = config.http_config().into_client().map_err(Error::Protocol)?;

        Ok(Self {
            config: config.clone(),
            client,
            state: Arc::new(RwLock::new(DeviceState::new())),
            events,
        })
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Returns the device identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.config.identifier
    }

    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the device address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.config.address
    }

    /// Returns the current entity state, if known.
    #[must_use]
    pub fn state(&self) -> Option<PlayerState> {
        self.state.read().player()
    }

    /// Returns an identifier for log lines: the name if set, otherwise the
    /// identifier.
    #[must_use]
    pub fn log_id(&self) -> &str {
        if self.config.name.is_empty() {
            &self.config.identifier
        } else {
            &self.config.name
        }
    }

    /// Returns a snapshot of the tracked device state.
    #[must_use]
    pub fn device_state(&self) -> DeviceState {
        self.state.read().clone()
    }

    /// Returns the current attribute bag.
    #[must_use]
    pub fn attributes(&self) -> MediaPlayerAttributes {
        self.state.read().attributes()
    }

    /// Returns the current attributes for the given entity.
    ///
    /// Called by the host when refreshing entity state. The driver backs a
    /// single entity, so the entity id is logged and otherwise ignored.
    #[must_use]
    pub fn get_device_attributes(&self, entity_id: &str) -> MediaPlayerAttributes {
        tracing::trace!(log_id = %self.log_id(), entity_id = %entity_id, "Reporting attributes");
        self.attributes()
    }

    /// Subscribes to this driver's events.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<DeviceEvent> {
        self.events.subscribe()
    }

    // =========================================================================
    // Connection Management
    // =========================================================================

    /// Verifies the device is reachable and refreshes the tracked state.
    ///
    /// Sends a status query, applies the reported values, and emits an
    /// [`DeviceEvent::Update`] if anything changed.
    ///
    /// # Errors
    ///
    /// Returns error if the device cannot be reached or replies with an
    /// unparseable status.
    pub async fn verify_connection(&self) -> Result<()> {
        tracing::debug!(
            log_id = %self.log_id(),
            address = %self.address(),
            "Verifying connection"
        );

        match self.refresh_status().await {
            Ok(()) => {
                tracing::debug!(
                    log_id = %self.log_id(),
                    state = ?self.state(),
                    "Connection verified"
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(log_id = %self.log_id(), error = %err, "Connection verification failed");
                Err(err)
            }
        }
    }

    async fn refresh_status(&self) -> Result<()> {
        let response = self.send(&StatusCommand::new()).await?;
        let status: StatusResponse = response.parse().map_err(Error::Parse)?;
        let payload = status.payload().map_err(Error::Parse)?;

        let mut changes = Vec::new();
        if let Some(power) = payload.power_state().map_err(Error::Parse)? {
            changes.push(StateChange::player(PlayerState::from(power)));
        }
        if let Some(volume) = payload.volume().map_err(Error::Parse)? {
            changes.push(StateChange::volume(volume));
        }
        if let Some(muted) = payload.muted().map_err(Error::Parse)? {
            changes.push(StateChange::muted(muted));
        }
        if let Some(source) = &payload.source {
            changes.push(StateChange::source(source.clone()));
        }
        if let Some(sources) = &payload.source_list {
            changes.push(StateChange::source_list(sources.clone()));
        }

        self.apply_and_emit(&StateChange::batch(changes));
        self.state.write().touch(Utc::now());
        Ok(())
    }

    /// Marks the device unreachable and emits an update.
    ///
    /// Called by the manager when polling fails, so the hub shows
    /// `UNAVAILABLE` instead of the last confirmed state.
    pub fn mark_unavailable(&self) {
        self.apply_and_emit(&StateChange::player(PlayerState::Unavailable));
    }

    // =========================================================================
    // Power Control
    // =========================================================================

    /// Turns the device on.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn power_on(&self) -> Result<()> {
        tracing::debug!(log_id = %self.log_id(), "Powering on");
        self.set_power(PowerCommand::on()).await
    }

    /// Turns the device off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn power_off(&self) -> Result<()> {
        tracing::debug!(log_id = %self.log_id(), "Powering off");
        self.set_power(PowerCommand::off()).await
    }

    /// Toggles the device power.
    ///
    /// Resolved against the tracked state: `On` turns the device off, any
    /// other (or unknown) state turns it on.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn power_toggle(&self) -> Result<()> {
        tracing::debug!(log_id = %self.log_id(), "Toggling power");

        if self.state() == Some(PlayerState::On) {
            self.power_off().await
        } else {
            self.power_on().await
        }
    }

    async fn set_power(&self, command: PowerCommand) -> Result<()> {
        let response = self.send(&command).await?;
        let power: PowerResponse = response.parse().map_err(Error::Parse)?;
        let state = power.power_state().map_err(Error::Parse)?;

        self.apply_and_emit(&StateChange::player(PlayerState::from(state)));
        Ok(())
    }

    // =========================================================================
    // Volume Control
    // =========================================================================

    /// Sets the volume level.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_volume(&self, volume: Volume) -> Result<()> {
        tracing::debug!(log_id = %self.log_id(), volume = volume.value(), "Setting volume");

        let response = self.send(&VolumeCommand::Set(volume)).await?;
        let reply: VolumeResponse = response.parse().map_err(Error::Parse)?;
        let confirmed = reply.volume().map_err(Error::Parse)?;

        self.apply_and_emit(&StateChange::volume(confirmed));
        Ok(())
    }

    /// Raises the volume by the default step.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn volume_up(&self) -> Result<()> {
        let current = self.current_volume().await?;
        self.set_volume(current.stepped_up(Volume::DEFAULT_STEP)).await
    }

    /// Lowers the volume by the default step.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn volume_down(&self) -> Result<()> {
        let current = self.current_volume().await?;
        self.set_volume(current.stepped_down(Volume::DEFAULT_STEP)).await
    }

    /// Returns the tracked volume, querying the device if it is not known
    /// yet.
    async fn current_volume(&self) -> Result<Volume> {
        if let Some(volume) = self.state.read().volume() {
            return Ok(volume);
        }

        let response = self.send(&VolumeCommand::Get).await?;
        let reply: VolumeResponse = response.parse().map_err(Error::Parse)?;
        let volume = reply.volume().map_err(Error::Parse)?;

        self.apply_and_emit(&StateChange::volume(volume));
        Ok(volume)
    }

    // =========================================================================
    // Mute Control
    // =========================================================================

    /// Mutes the device.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn mute(&self) -> Result<()> {
        self.set_mute(MuteCommand::On).await
    }

    /// Unmutes the device.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn unmute(&self) -> Result<()> {
        self.set_mute(MuteCommand::Off).await
    }

    /// Toggles mute.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn mute_toggle(&self) -> Result<()> {
        self.set_mute(MuteCommand::Toggle).await
    }

    async fn set_mute(&self, command: MuteCommand) -> Result<()> {
        tracing::debug!(log_id = %self.log_id(), command = %command.to_http_command(), "Setting mute");

        let response = self.send(&command).await?;
        let reply: MuteResponse = response.parse().map_err(Error::Parse)?;
        let muted = reply.is_muted().map_err(Error::Parse)?;

        self.apply_and_emit(&StateChange::muted(muted));
        Ok(())
    }

    // =========================================================================
    // Source Selection
    // =========================================================================

    /// Selects an input source by name.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn select_source(&self, name: &str) -> Result<()> {
        tracing::debug!(log_id = %self.log_id(), source = %name, "Selecting source");

        let response = self.send(&SourceCommand::select(name)).await?;
        let reply: SourceResponse = response.parse().map_err(Error::Parse)?;
        let confirmed = reply.source().map_err(Error::Parse)?.to_string();

        self.apply_and_emit(&StateChange::source(confirmed));
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn send<C: Command + Sync>(&self, command: &C) -> Result<CommandResponse> {
        self.client.send_command(command).await.map_err(Error::Protocol)
    }

    /// Applies a change to the tracked state and publishes an update event
    /// if anything actually changed.
    fn apply_and_emit(&self, change: &StateChange) {
        let (changed, attributes) = {
            let mut state = self.state.write();
            let changed = state.apply(change);
            (changed, state.attributes())
        };

        if changed {
            self.events
                .publish(DeviceEvent::update(self.identifier(), attributes));
        }
    }
}
