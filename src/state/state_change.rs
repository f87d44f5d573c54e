// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are the building blocks for updating tracked device state.
//! They are produced from command replies and status refreshes, applied to a
//! [`DeviceState`](super::DeviceState), and carried in update events.

use serde::{Deserialize, Serialize};

use crate::types::{PlayerState, Volume};

/// Represents a change in device state.
///
/// # Examples
///
/// ```
/// use medior_lib::state::StateChange;
/// use medior_lib::types::{PlayerState, Volume};
///
/// let on = StateChange::player(PlayerState::On);
/// let vol = StateChange::volume(Volume::new(42).unwrap());
/// let both = StateChange::batch(vec![on, vol]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateChange {
    /// The entity state changed.
    Player(PlayerState),

    /// The volume level changed.
    Volume(Volume),

    /// The mute state changed.
    Muted(bool),

    /// The active input source changed.
    Source(String),

    /// The available source list changed.
    SourceList(Vec<String>),

    /// Multiple changes at once.
    ///
    /// Used when a status refresh returns multiple values.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates an entity state change.
    #[must_use]
    pub fn player(state: PlayerState) -> Self {
        Self::Player(state)
    }

    /// Creates a volume change.
    #[must_use]
    pub fn volume(volume: Volume) -> Self {
        Self::Volume(volume)
    }

    /// Creates a mute change.
    #[must_use]
    pub fn muted(muted: bool) -> Self {
        Self::Muted(muted)
    }

    /// Creates a source change.
    #[must_use]
    pub fn source(name: impl Into<String>) -> Self {
        Self::Source(name.into())
    }

    /// Creates a source list change.
    #[must_use]
    pub fn source_list(sources: Vec<String>) -> Self {
        Self::SourceList(sources)
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(changes: Vec<StateChange>) -> Self {
        Self::Batch(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(
            StateChange::player(PlayerState::Off),
            StateChange::Player(PlayerState::Off)
        );
        assert_eq!(StateChange::muted(true), StateChange::Muted(true));
        assert_eq!(
            StateChange::source("HDMI 1"),
            StateChange::Source("HDMI 1".to_string())
        );
    }

    #[test]
    fn batch_preserves_order() {
        let batch = StateChange::batch(vec![
            StateChange::player(PlayerState::On),
            StateChange::volume(Volume::new(10).unwrap()),
        ]);

        if let StateChange::Batch(changes) = batch {
            assert_eq!(changes.len(), 2);
            assert!(matches!(changes[0], StateChange::Player(PlayerState::On)));
        } else {
            panic!("Expected Batch");
        }
    }

    #[test]
    fn serde_round_trip() {
        let change = StateChange::volume(Volume::new(55).unwrap());
        let json = serde_json::to_string(&change).unwrap();
        let back: StateChange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);
    }
}
