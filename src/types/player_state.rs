// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Player state reported to the remote hub.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::types::PowerState;

/// The entity state of a media-player device.
///
/// This is the state vocabulary the remote hub understands. A stateless HTTP
/// device reports `On`/`Off` from its power replies; `Unavailable` is set by
/// the driver when the device stops responding. The playback states exist for
/// devices whose status reports them.
///
/// # Examples
///
/// ```
/// use medior_lib::types::PlayerState;
///
/// assert_eq!(PlayerState::On.as_str(), "ON");
/// assert_eq!("PAUSED".parse::<PlayerState>().unwrap(), PlayerState::Paused);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerState {
    /// State has not been determined yet.
    Unknown,
    /// The device is not reachable.
    Unavailable,
    /// The device is powered off.
    Off,
    /// The device is powered on.
    On,
    /// The device is in standby.
    Standby,
    /// The device is playing media.
    Playing,
    /// Playback is paused.
    Paused,
}

impl PlayerState {
    /// Returns the hub-facing string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Unavailable => "UNAVAILABLE",
            Self::Off => "OFF",
            Self::On => "ON",
            Self::Standby => "STANDBY",
            Self::Playing => "PLAYING",
            Self::Paused => "PAUSED",
        }
    }

    /// Returns `true` if the device is reachable in this state.
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        !matches!(self, Self::Unknown | Self::Unavailable)
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlayerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNKNOWN" => Ok(Self::Unknown),
            "UNAVAILABLE" => Ok(Self::Unavailable),
            "OFF" => Ok(Self::Off),
            "ON" => Ok(Self::On),
            "STANDBY" => Ok(Self::Standby),
            "PLAYING" => Ok(Self::Playing),
            "PAUSED" => Ok(Self::Paused),
            _ => Err(ValueError::InvalidPlayerState(s.to_string())),
        }
    }
}

impl From<PowerState> for PlayerState {
    /// Maps a resolved wire power value to the entity state.
    ///
    /// `Toggle` never appears in replies; it maps to `Unknown`.
    fn from(value: PowerState) -> Self {
        match value {
            PowerState::On => Self::On,
            PowerState::Off => Self::Off,
            PowerState::Toggle => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_values() {
        assert_eq!(PlayerState::Unavailable.as_str(), "UNAVAILABLE");
        assert_eq!(PlayerState::Standby.as_str(), "STANDBY");
        assert_eq!(PlayerState::Playing.as_str(), "PLAYING");
    }

    #[test]
    fn from_str_case_insensitive() {
        assert_eq!("on".parse::<PlayerState>().unwrap(), PlayerState::On);
        assert_eq!("Paused".parse::<PlayerState>().unwrap(), PlayerState::Paused);
    }

    #[test]
    fn from_str_invalid() {
        assert!(matches!(
            "REWINDING".parse::<PlayerState>(),
            Err(ValueError::InvalidPlayerState(_))
        ));
    }

    #[test]
    fn from_power_state() {
        assert_eq!(PlayerState::from(PowerState::On), PlayerState::On);
        assert_eq!(PlayerState::from(PowerState::Off), PlayerState::Off);
        assert_eq!(PlayerState::from(PowerState::Toggle), PlayerState::Unknown);
    }

    #[test]
    fn reachability() {
        assert!(PlayerState::On.is_reachable());
        assert!(PlayerState::Off.is_reachable());
        assert!(!PlayerState::Unavailable.is_reachable());
        assert!(!PlayerState::Unknown.is_reachable());
    }

    #[test]
    fn serde_screaming_case() {
        let json = serde_json::to_string(&PlayerState::Unavailable).unwrap();
        assert_eq!(json, "\"UNAVAILABLE\"");
        let state: PlayerState = serde_json::from_str("\"PLAYING\"").unwrap();
        assert_eq!(state, PlayerState::Playing);
    }
}
