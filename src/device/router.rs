// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generic command routing.
//!
//! The remote hub addresses drivers with plain command names and a
//! loosely-typed argument map. [`Device::send_command`] routes those to the
//! typed operations.

use serde_json::Value;

use crate::error::{DeviceError, Error, Result};
use crate::types::Volume;

use super::Device;

/// Arguments of a routed command, as received from the hub.
pub type CommandArgs = serde_json::Map<String, Value>;

impl Device {
    /// Routes a hub command to the matching device operation.
    ///
    /// Supported commands:
    ///
    /// | Command | Arguments | Operation |
    /// |---|---|---|
    /// | `on` | - | [`power_on`](Self::power_on) |
    /// | `off` | - | [`power_off`](Self::power_off) |
    /// | `toggle` | - | [`power_toggle`](Self::power_toggle) |
    /// | `volume` | `volume` (0-100) | [`set_volume`](Self::set_volume) |
    /// | `volume_up` | - | [`volume_up`](Self::volume_up) |
    /// | `volume_down` | - | [`volume_down`](Self::volume_down) |
    /// | `mute` | - | [`mute`](Self::mute) |
    /// | `unmute` | - | [`unmute`](Self::unmute) |
    /// | `mute_toggle` | - | [`mute_toggle`](Self::mute_toggle) |
    /// | `select_source` | `source` | [`select_source`](Self::select_source) |
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnknownCommand` for unrecognized commands,
    /// `DeviceError::MissingArgument`/`InvalidArgument` for bad arguments,
    /// and the underlying error if the device operation fails.
    pub async fn send_command(&self, command: &str, args: &CommandArgs) -> Result<()> {
        tracing::debug!(log_id = %self.log_id(), command = %command, "Sending command");

        match command {
            "on" => self.power_on().await,
            "off" => self.power_off().await,
            "toggle" => self.power_toggle().await,
            "volume" => {
                let level = require_integer(args, "volume", command)?;
                let volume = Volume::new(level).map_err(|e| {
                    Error::Device(DeviceError::InvalidArgument {
                        command: command.to_string(),
                        argument: "volume".to_string(),
                        message: e.to_string(),
                    })
                })?;
                self.set_volume(volume).await
            }
            "volume_up" => self.volume_up().await,
            "volume_down" => self.volume_down().await,
            "mute" => self.mute().await,
            "unmute" => self.unmute().await,
            "mute_toggle" => self.mute_toggle().await,
            "select_source" => {
                let source = require_string(args, "source", command)?;
                self.select_source(source).await
            }
            _ => {
                tracing::warn!(log_id = %self.log_id(), command = %command, "Unknown command");
                Err(Error::Device(DeviceError::UnknownCommand(
                    command.to_string(),
                )))
            }
        }
    }
}

fn require_integer(args: &CommandArgs, key: &str, command: &str) -> Result<u8> {
    let value = args.get(key).ok_or_else(|| {
        Error::Device(DeviceError::MissingArgument {
            command: command.to_string(),
            argument: key.to_string(),
        })
    })?;

    value
        .as_u64()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| {
            Error::Device(DeviceError::InvalidArgument {
                command: command.to_string(),
                argument: key.to_string(),
                message: format!("expected a small integer, got {value}"),
            })
        })
}

fn require_string<'a>(args: &'a CommandArgs, key: &str, command: &str) -> Result<&'a str> {
    let value = args.get(key).ok_or_else(|| {
        Error::Device(DeviceError::MissingArgument {
            command: command.to_string(),
            argument: key.to_string(),
        })
    })?;

    value.as_str().ok_or_else(|| {
        Error::Device(DeviceError::InvalidArgument {
            command: command.to_string(),
            argument: key.to_string(),
            message: format!("expected a string, got {value}"),
        })
    })
}
