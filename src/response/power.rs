// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power response parsing.

use serde::Deserialize;

use crate::error::{ParseError, ValueError};
use crate::types::PowerState;

/// Response from a `Power` command.
///
/// The device returns the resolved power state in JSON format:
/// `{"Power": "ON"}` or `{"Power": "OFF"}`.
///
/// # Examples
///
/// ```
/// use medior_lib::response::PowerResponse;
/// use medior_lib::types::PowerState;
///
/// let json = r#"{"Power": "ON"}"#;
/// let response: PowerResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.power_state().unwrap(), PowerState::On);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PowerResponse {
    #[serde(rename = "Power", default)]
    power: Option<String>,
}

impl PowerResponse {
    /// Returns the resolved power state.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the reply carries no `Power`
    /// field, or `ParseError::InvalidValue` if the state string is invalid.
    pub fn power_state(&self) -> Result<PowerState, ParseError> {
        let raw = self
            .power
            .as_deref()
            .ok_or_else(|| ParseError::MissingField("Power".to_string()))?;

        raw.parse::<PowerState>()
            .map_err(|e| ParseError::InvalidValue {
                field: "Power".to_string(),
                message: match e {
                    ValueError::InvalidPowerState(s) => s,
                    other => other.to_string(),
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_power_on() {
        let json = r#"{"Power": "ON"}"#;
        let response: PowerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.power_state().unwrap(), PowerState::On);
    }

    #[test]
    fn parse_power_off() {
        let json = r#"{"Power": "OFF"}"#;
        let response: PowerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.power_state().unwrap(), PowerState::Off);
    }

    #[test]
    fn missing_field() {
        let json = r"{}";
        let response: PowerResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response.power_state(),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn invalid_state_string() {
        let json = r#"{"Power": "HALF"}"#;
        let response: PowerResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response.power_state(),
            Err(ParseError::InvalidValue { .. })
        ));
    }
}
