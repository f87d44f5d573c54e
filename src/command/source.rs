// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input source commands.

use crate::command::Command;

/// Command to select or query the active input source.
///
/// Source names are free-form device strings (e.g. `HDMI 1`, `Bluetooth`);
/// the valid set is reported by the device status as `SourceList`.
///
/// # Examples
///
/// ```
/// use medior_lib::command::{Command, SourceCommand};
///
/// let cmd = SourceCommand::select("HDMI 1");
/// assert_eq!(cmd.name(), "Source");
/// assert_eq!(cmd.payload(), Some("HDMI 1".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCommand {
    /// Query the current source.
    Get,
    /// Select an input source by name.
    Select(String),
}

impl SourceCommand {
    /// Creates a command to select the named source.
    #[must_use]
    pub fn select(name: impl Into<String>) -> Self {
        Self::Select(name.into())
    }
}

impl Command for SourceCommand {
    fn name(&self) -> String {
        "Source".to_string()
    }

    fn payload(&self) -> Option<String> {
        match self {
            Self::Get => None,
            Self::Select(name) => Some(name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_source() {
        let cmd = SourceCommand::select("Bluetooth");
        assert_eq!(cmd.to_http_command(), "Source Bluetooth");
    }

    #[test]
    fn query_source() {
        assert_eq!(SourceCommand::Get.to_http_command(), "Source");
    }
}
