// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume and mute response parsing.

use serde::Deserialize;

use crate::error::{ParseError, ValueError};
use crate::types::{PowerState, Volume};

/// Response from a `Volume` command.
///
/// The device returns the resolved level: `{"Volume": 42}`.
///
/// # Examples
///
/// ```
/// use medior_lib::response::VolumeResponse;
///
/// let json = r#"{"Volume": 42}"#;
/// let response: VolumeResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.volume().unwrap().value(), 42);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeResponse {
    #[serde(rename = "Volume", default)]
    volume: Option<u16>,
}

impl VolumeResponse {
    /// Returns the resolved volume level.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the reply carries no `Volume`
    /// field, or `ParseError::InvalidValue` if the level is out of range.
    pub fn volume(&self) -> Result<Volume, ParseError> {
        let raw = self
            .volume
            .ok_or_else(|| ParseError::MissingField("Volume".to_string()))?;

        u8::try_from(raw)
            .map_err(|_| ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: raw,
            })
            .and_then(Volume::new)
            .map_err(|e| ParseError::InvalidValue {
                field: "Volume".to_string(),
                message: e.to_string(),
            })
    }
}

/// Response from a `Mute` command.
///
/// The device returns the resolved mute state: `{"Mute": "ON"}` or
/// `{"Mute": "OFF"}`, even when the command was a `TOGGLE`.
#[derive(Debug, Clone, Deserialize)]
pub struct MuteResponse {
    #[serde(rename = "Mute", default)]
    mute: Option<String>,
}

impl MuteResponse {
    /// Returns the resolved mute state.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the reply carries no `Mute`
    /// field, or `ParseError::InvalidValue` if the state string is invalid.
    pub fn is_muted(&self) -> Result<bool, ParseError> {
        let raw = self
            .mute
            .as_deref()
            .ok_or_else(|| ParseError::MissingField("Mute".to_string()))?;

        raw.parse::<PowerState>()
            .map(|state| state.is_on())
            .map_err(|e| ParseError::InvalidValue {
                field: "Mute".to_string(),
                message: e.to_string(),
            })
    }
}
