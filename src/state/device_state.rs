// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attributes::MediaPlayerAttributes;
use crate::types::{PlayerState, Volume};

use super::StateChange;

/// Tracked state of a media-player device.
///
/// All fields are optional because state is not known until the device
/// reports it. The attribute bag sent to the hub is derived from this
/// struct via [`attributes`](Self::attributes).
///
/// # Examples
///
/// ```
/// use medior_lib::state::DeviceState;
/// use medior_lib::types::PlayerState;
///
/// let mut state = DeviceState::new();
/// state.set_player(PlayerState::On);
/// assert_eq!(state.player(), Some(PlayerState::On));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    /// The entity state.
    player: Option<PlayerState>,
    /// Volume level (0-100).
    volume: Option<Volume>,
    /// Mute state.
    muted: Option<bool>,
    /// Active input source.
    source: Option<String>,
    /// Available input sources.
    source_list: Option<Vec<String>>,
    /// Timestamp of the last successful device contact.
    last_seen: Option<DateTime<Utc>>,
}

impl DeviceState {
    /// Creates a new empty device state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the entity state.
    #[must_use]
    pub fn player(&self) -> Option<PlayerState> {
        self.player
    }

    /// Sets the entity state.
    pub fn set_player(&mut self, state: PlayerState) {
        self.player = Some(state);
    }

    /// Gets the volume level.
    #[must_use]
    pub fn volume(&self) -> Option<Volume> {
        self.volume
    }

    /// Sets the volume level.
    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = Some(volume);
    }

    /// Gets the mute state.
    #[must_use]
    pub fn muted(&self) -> Option<bool> {
        self.muted
    }

    /// Sets the mute state.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = Some(muted);
    }

    /// Gets the active source.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Sets the active source.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }

    /// Gets the available source list.
    #[must_use]
    pub fn source_list(&self) -> Option<&[String]> {
        self.source_list.as_deref()
    }

    /// Sets the available source list.
    pub fn set_source_list(&mut self, sources: Vec<String>) {
        self.source_list = Some(sources);
    }

    /// Gets the timestamp of the last successful device contact.
    #[must_use]
    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        self.last_seen
    }

    /// Records a successful device contact.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.last_seen = Some(at);
    }

    /// Applies a state change.
    ///
    /// Returns `true` if the state actually changed. A [`StateChange::Batch`]
    /// reports `true` if any contained change took effect.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Player(state) => {
                let changed = self.player != Some(*state);
                self.player = Some(*state);
                changed
            }
            StateChange::Volume(volume) => {
                let changed = self.volume != Some(*volume);
                self.volume = Some(*volume);
                changed
            }
            StateChange::Muted(muted) => {
                let changed = self.muted != Some(*muted);
                self.muted = Some(*muted);
                changed
            }
            StateChange::Source(source) => {
                let changed = self.source.as_deref() != Some(source.as_str());
                self.source = Some(source.clone());
                changed
            }
            StateChange::SourceList(sources) => {
                let changed = self.source_list.as_deref() != Some(sources.as_slice());
                self.source_list = Some(sources.clone());
                changed
            }
            StateChange::Batch(changes) => {
                let mut changed = false;
                for inner in changes {
                    changed |= self.apply(inner);
                }
                changed
            }
        }
    }

    /// Derives the hub-facing attribute bag from the tracked state.
    #[must_use]
    pub fn attributes(&self) -> MediaPlayerAttributes {
        MediaPlayerAttributes {
            state: self.player,
            volume: self.volume.map(|v| v.value()),
            muted: self.muted,
            source: self.source.clone(),
            source_list: self.source_list.clone(),
        }
    }
}
