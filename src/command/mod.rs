// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device command definitions.
//!
//! This module provides typed representations of the commands a stateless
//! HTTP media-player device accepts.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Example |
//! |-------------|---------|---------|
//! | [`PowerCommand`] | Control or query power | On, Off |
//! | [`VolumeCommand`] | Set or query volume (0-100) | Set to 42 |
//! | [`MuteCommand`] | Control or query mute | On, Off, Toggle |
//! | [`SourceCommand`] | Select or query the input source | HDMI 1 |
//! | [`StatusCommand`] | Query the full device status | Status |
//!
//! # Command Structure
//!
//! Each command consists of:
//! - A command name (e.g., `Power`, `Volume`, `Status`)
//! - An optional payload (e.g., `ON`, `42`, `HDMI 1`)
//!
//! A command without a payload queries the current value.
//!
//! # Examples
//!
//! ```
//! use medior_lib::command::{Command, PowerCommand, VolumeCommand};
//! use medior_lib::types::Volume;
//!
//! let cmd = PowerCommand::on();
//! assert_eq!(cmd.name(), "Power");
//! assert_eq!(cmd.payload(), Some("ON".to_string()));
//!
//! let vol = VolumeCommand::Set(Volume::new(42).unwrap());
//! assert_eq!(vol.to_http_command(), "Volume 42");
//! ```

mod power;
mod source;
mod status;
mod volume;

pub use power::PowerCommand;
pub use source::SourceCommand;
pub use status::StatusCommand;
pub use volume::{MuteCommand, VolumeCommand};

/// A command that can be sent to a media-player device.
///
/// Commands are serialized to the device command format for transmission
/// over HTTP.
pub trait Command {
    /// Returns the command name.
    ///
    /// For example, `"Power"`, `"Volume"`, `"Status"`.
    fn name(&self) -> String;

    /// Returns the command payload, if any.
    ///
    /// The payload is the value sent with the command. For example:
    /// - `Power ON` has payload `Some("ON")`
    /// - `Power` (query) has payload `None`
    /// - `Volume 42` has payload `Some("42")`
    fn payload(&self) -> Option<String>;

    /// Returns the full command string for HTTP requests.
    ///
    /// Format: `<name> <payload>` or just `<name>` if no payload.
    fn to_http_command(&self) -> String {
        match self.payload() {
            Some(p) => format!("{} {}", self.name(), p),
            None => self.name(),
        }
    }
}
