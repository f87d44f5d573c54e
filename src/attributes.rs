// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity attributes reported to the remote hub.

use serde::{Deserialize, Serialize};

use crate::types::PlayerState;

/// The media-player attribute bag the hub displays.
///
/// Keys follow the hub's attribute naming (`STATE`, `VOLUME`, ...); unset
/// attributes are omitted from the serialized form. The bag is a derived
/// view of the driver's tracked state, never a second source of truth.
///
/// # Examples
///
/// ```
/// use medior_lib::MediaPlayerAttributes;
/// use medior_lib::types::PlayerState;
///
/// let mut attrs = MediaPlayerAttributes::new();
/// attrs.state = Some(PlayerState::On);
/// attrs.volume = Some(42);
///
/// let json = serde_json::to_value(&attrs).unwrap();
/// assert_eq!(json["STATE"], "ON");
/// assert_eq!(json["VOLUME"], 42);
/// assert!(json.get("MUTED").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MediaPlayerAttributes {
    /// The entity state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<PlayerState>,

    /// Volume level (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u8>,

    /// Whether the device is muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,

    /// The active input source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// The available input sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_list: Option<Vec<String>>,
}

impl MediaPlayerAttributes {
    /// Creates an empty attribute bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_none()
            && self.volume.is_none()
            && self.muted.is_none()
            && self.source.is_none()
            && self.source_list.is_none()
    }
}
