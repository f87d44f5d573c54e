// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status query command.

use crate::command::Command;

/// Command to query the full device status.
///
/// The reply carries the device identity (name, firmware version) together
/// with the complete current state: power, volume, mute, source and the
/// available source list. This is the command the driver uses to verify
/// connectivity and refresh its tracked state in one round trip.
///
/// # Examples
///
/// ```
/// use medior_lib::command::{Command, StatusCommand};
///
/// let cmd = StatusCommand::new();
/// assert_eq!(cmd.to_http_command(), "Status");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCommand;

impl StatusCommand {
    /// Creates a status query command.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Command for StatusCommand {
    fn name(&self) -> String {
        "Status".to_string()
    }

    fn payload(&self) -> Option<String> {
        None
    }
}
