// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Source response parsing.

use serde::Deserialize;

use crate::error::ParseError;

/// Response from a `Source` command.
///
/// The device returns the active source name: `{"Source": "HDMI 1"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceResponse {
    #[serde(rename = "Source", default)]
    source: Option<String>,
}

impl SourceResponse {
    /// Returns the active source name.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the reply carries no `Source`
    /// field.
    pub fn source(&self) -> Result<&str, ParseError> {
        self.source
            .as_deref()
            .ok_or_else(|| ParseError::MissingField("Source".to_string()))
    }
}
