// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `Medior` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation, HTTP communication, response parsing, command routing,
//! and configuration persistence.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when driving
/// a media-player device.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during HTTP communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a device response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred while routing or executing a command.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// Error occurred in the configuration store.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Device was not found in the manager.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// Device is not connected.
    #[error("device is not connected")]
    NotConnected,
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An invalid player state string was provided.
    #[error("invalid player state: {0}")]
    InvalidPlayerState(String),
}

/// Errors related to HTTP communication with the device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to command routing and execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The command name is not recognized by the router.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A required command argument is missing.
    #[error("command {command} requires argument {argument}")]
    MissingArgument {
        /// The command that was invoked.
        command: String,
        /// The argument that was missing.
        argument: String,
    },

    /// A command argument has the wrong type or an invalid value.
    #[error("invalid argument {argument} for command {command}: {message}")]
    InvalidArgument {
        /// The command that was invoked.
        command: String,
        /// The offending argument.
        argument: String,
        /// Description of the problem.
        message: String,
    },
}

/// Errors related to the configuration store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contains invalid JSON.
    #[error("invalid configuration file: {0}")]
    Format(#[from] serde_json::Error),

    /// A device with the same identifier is already configured.
    #[error("device already configured: {0}")]
    DuplicateDevice(String),

    /// No device with the given identifier is configured.
    #[error("no such configured device: {0}")]
    UnknownDevice(String),

    /// A configuration entry is invalid.
    #[error("invalid device configuration: {0}")]
    InvalidEntry(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidPlayerState("HALTED".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidPlayerState(_))));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("Power".to_string());
        assert_eq!(err.to_string(), "missing field in response: Power");
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::MissingArgument {
            command: "volume".to_string(),
            argument: "volume".to_string(),
        };
        assert_eq!(err.to_string(), "command volume requires argument volume");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::DuplicateDevice("living-room".to_string());
        assert_eq!(err.to_string(), "device already configured: living-room");
    }
}
