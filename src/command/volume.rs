// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume and mute commands.

use crate::command::Command;
use crate::types::{PowerState, Volume};

/// Command to set or query the volume level.
///
/// # Examples
///
/// ```
/// use medior_lib::command::{Command, VolumeCommand};
/// use medior_lib::types::Volume;
///
/// let cmd = VolumeCommand::Set(Volume::new(42).unwrap());
/// assert_eq!(cmd.name(), "Volume");
/// assert_eq!(cmd.payload(), Some("42".to_string()));
///
/// let query = VolumeCommand::Get;
/// assert_eq!(query.payload(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeCommand {
    /// Query the current volume.
    Get,
    /// Set the volume level.
    Set(Volume),
}

impl Command for VolumeCommand {
    fn name(&self) -> String {
        "Volume".to_string()
    }

    fn payload(&self) -> Option<String> {
        match self {
            Self::Get => None,
            Self::Set(volume) => Some(volume.value().to_string()),
        }
    }
}

/// Command to control or query mute.
///
/// Unlike power, mute supports a wire-level `TOGGLE`: the device resolves it
/// and replies with the resulting `ON` or `OFF`, so no prior state query is
/// needed.
///
/// # Examples
///
/// ```
/// use medior_lib::command::{Command, MuteCommand};
///
/// assert_eq!(MuteCommand::On.payload(), Some("ON".to_string()));
/// assert_eq!(MuteCommand::Toggle.payload(), Some("TOGGLE".to_string()));
/// assert_eq!(MuteCommand::Get.payload(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteCommand {
    /// Query the current mute state.
    Get,
    /// Mute the device.
    On,
    /// Unmute the device.
    Off,
    /// Toggle mute.
    Toggle,
}

impl Command for MuteCommand {
    fn name(&self) -> String {
        "Mute".to_string()
    }

    fn payload(&self) -> Option<String> {
        match self {
            Self::Get => None,
            Self::On => Some(PowerState::On.as_str().to_string()),
            Self::Off => Some(PowerState::Off.as_str().to_string()),
            Self::Toggle => Some(PowerState::Toggle.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_set() {
        let cmd = VolumeCommand::Set(Volume::new(75).unwrap());
        assert_eq!(cmd.to_http_command(), "Volume 75");
    }

    #[test]
    fn volume_query() {
        assert_eq!(VolumeCommand::Get.to_http_command(), "Volume");
    }

    #[test]
    fn mute_payloads() {
        assert_eq!(MuteCommand::On.to_http_command(), "Mute ON");
        assert_eq!(MuteCommand::Off.to_http_command(), "Mute OFF");
        assert_eq!(MuteCommand::Toggle.to_http_command(), "Mute TOGGLE");
        assert_eq!(MuteCommand::Get.to_http_command(), "Mute");
    }
}
