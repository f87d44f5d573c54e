// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control commands.

use crate::command::Command;
use crate::types::PowerState;

/// Command to control or query device power.
///
/// Toggling is intentionally absent here: the driver resolves a toggle
/// against its tracked state and sends an explicit `ON` or `OFF`, so the
/// confirmed reply always names the resulting state.
///
/// # Examples
///
/// ```
/// use medior_lib::command::{Command, PowerCommand};
///
/// let cmd = PowerCommand::on();
/// assert_eq!(cmd.name(), "Power");
/// assert_eq!(cmd.payload(), Some("ON".to_string()));
///
/// let query = PowerCommand::query();
/// assert_eq!(query.payload(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommand {
    /// Query the current power state.
    Get,
    /// Set the power state.
    Set {
        /// The desired power state.
        state: PowerState,
    },
}

impl PowerCommand {
    /// Creates a command to turn the device on.
    #[must_use]
    pub const fn on() -> Self {
        Self::Set {
            state: PowerState::On,
        }
    }

    /// Creates a command to turn the device off.
    #[must_use]
    pub const fn off() -> Self {
        Self::Set {
            state: PowerState::Off,
        }
    }

    /// Creates a command to query the power state.
    #[must_use]
    pub const fn query() -> Self {
        Self::Get
    }
}

impl Command for PowerCommand {
    fn name(&self) -> String {
        "Power".to_string()
    }

    fn payload(&self) -> Option<String> {
        match self {
            Self::Get => None,
            Self::Set { state } => Some(state.as_str().to_string()),
        }
    }
}
