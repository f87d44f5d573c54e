// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response parsing.

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::{PowerState, Volume};

/// Response from a `Status` command.
///
/// The device wraps its status in a `Status` object:
///
/// ```json
/// {
///   "Status": {
///     "DeviceName": "Living Room Player",
///     "Version": "2.4.1",
///     "Power": "ON",
///     "Volume": 42,
///     "Mute": "OFF",
///     "Source": "HDMI 1",
///     "SourceList": ["HDMI 1", "HDMI 2", "Bluetooth"]
///   }
/// }
/// ```
///
/// All inner fields are optional; devices report what they support.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "Status", default)]
    status: Option<StatusPayload>,
}

/// The inner status object of a [`StatusResponse`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPayload {
    /// The device's configured display name.
    #[serde(rename = "DeviceName", default)]
    pub device_name: Option<String>,
    /// Firmware version string.
    #[serde(rename = "Version", default)]
    pub version: Option<String>,
    /// Current power state (`ON`/`OFF`).
    #[serde(rename = "Power", default)]
    pub power: Option<String>,
    /// Current volume level (0-100).
    #[serde(rename = "Volume", default)]
    pub volume: Option<u16>,
    /// Current mute state (`ON`/`OFF`).
    #[serde(rename = "Mute", default)]
    pub mute: Option<String>,
    /// Active input source.
    #[serde(rename = "Source", default)]
    pub source: Option<String>,
    /// Available input sources.
    #[serde(rename = "SourceList", default)]
    pub source_list: Option<Vec<String>>,
}

impl StatusResponse {
    /// Returns the inner status object.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the reply carries no `Status`
    /// object.
    pub fn payload(&self) -> Result<&StatusPayload, ParseError> {
        self.status
            .as_ref()
            .ok_or_else(|| ParseError::MissingField("Status".to_string()))
    }
}

impl StatusPayload {
    /// Returns the reported power state, if present.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidValue` if the state string is invalid.
    pub fn power_state(&self) -> Result<Option<PowerState>, ParseError> {
        self.power
            .as_deref()
            .map(|raw| {
                raw.parse::<PowerState>()
                    .map_err(|e| ParseError::InvalidValue {
                        field: "Power".to_string(),
                        message: e.to_string(),
                    })
            })
            .transpose()
    }

    /// Returns the reported volume, if present.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidValue` if the level is out of range.
    pub fn volume(&self) -> Result<Option<Volume>, ParseError> {
        self.volume
            .map(|raw| {
                u8::try_from(raw)
                    .ok()
                    .and_then(|v| Volume::new(v).ok())
                    .ok_or_else(|| ParseError::InvalidValue {
                        field: "Volume".to_string(),
                        message: format!("level {raw} is out of range"),
                    })
            })
            .transpose()
    }

    /// Returns the reported mute state, if present.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidValue` if the state string is invalid.
    pub fn muted(&self) -> Result<Option<bool>, ParseError> {
        self.mute
            .as_deref()
            .map(|raw| {
                raw.parse::<PowerState>()
                    .map(|state| state.is_on())
                    .map_err(|e| ParseError::InvalidValue {
                        field: "Mute".to_string(),
                        message: e.to_string(),
                    })
            })
            .transpose()
    }
}
