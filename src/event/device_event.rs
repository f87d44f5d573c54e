// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device event types.

use serde::{Deserialize, Serialize};

use crate::attributes::MediaPlayerAttributes;

/// Events emitted by drivers and the device manager.
///
/// These events notify subscribers about device lifecycle changes,
/// connection status, and attribute updates. All events carry the
/// configured identifier of the device they concern.
///
/// # Examples
///
/// ```
/// use medior_lib::event::DeviceEvent;
/// use medior_lib::MediaPlayerAttributes;
///
/// let added = DeviceEvent::device_added("living-room");
/// assert!(added.is_lifecycle());
///
/// let update = DeviceEvent::update("living-room", MediaPlayerAttributes::new());
/// assert!(update.is_update());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeviceEvent {
    /// A device was added to the manager.
    DeviceAdded {
        /// The identifier of the added device.
        identifier: String,
    },

    /// A device was removed from the manager.
    DeviceRemoved {
        /// The identifier of the removed device.
        identifier: String,
    },

    /// Device connection state changed.
    ConnectionChanged {
        /// The identifier of the device.
        identifier: String,
        /// Whether the device is now reachable.
        connected: bool,
        /// Error message if the change was due to a failure.
        error: Option<String>,
    },

    /// Device attributes changed.
    ///
    /// Emitted whenever tracked state changes, either from a command reply
    /// or from a status refresh. Carries the complete current attribute bag.
    Update {
        /// The identifier of the device.
        identifier: String,
        /// The current attributes of the device.
        attributes: MediaPlayerAttributes,
    },
}

impl DeviceEvent {
    /// Returns the identifier of the device this event concerns.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::DeviceAdded { identifier }
            | Self::DeviceRemoved { identifier }
            | Self::ConnectionChanged { identifier, .. }
            | Self::Update { identifier, .. } => identifier,
        }
    }

    /// Returns `true` if this is a device lifecycle event (added/removed).
    #[must_use]
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::DeviceAdded { .. } | Self::DeviceRemoved { .. })
    }

    /// Returns `true` if this is a connection event.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionChanged { .. })
    }

    /// Returns `true` if this is an attribute update event.
    #[must_use]
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    /// Creates a device added event.
    #[must_use]
    pub fn device_added(identifier: impl Into<String>) -> Self {
        Self::DeviceAdded {
            identifier: identifier.into(),
        }
    }

    /// Creates a device removed event.
    #[must_use]
    pub fn device_removed(identifier: impl Into<String>) -> Self {
        Self::DeviceRemoved {
            identifier: identifier.into(),
        }
    }

    /// Creates a connected event.
    #[must_use]
    pub fn connected(identifier: impl Into<String>) -> Self {
        Self::ConnectionChanged {
            identifier: identifier.into(),
            connected: true,
            error: None,
        }
    }

    /// Creates a disconnected event.
    #[must_use]
    pub fn disconnected(identifier: impl Into<String>) -> Self {
        Self::ConnectionChanged {
            identifier: identifier.into(),
            connected: false,
            error: None,
        }
    }

    /// Creates a disconnected event with an error.
    #[must_use]
    pub fn disconnected_with_error(
        identifier: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self::ConnectionChanged {
            identifier: identifier.into(),
            connected: false,
            error: Some(error.into()),
        }
    }

    /// Creates an attribute update event.
    #[must_use]
    pub fn update(identifier: impl Into<String>, attributes: MediaPlayerAttributes) -> Self {
        Self::Update {
            identifier: identifier.into(),
            attributes,
        }
    }
}
