// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for device JSON replies.
//!
//! This module provides structures for deserializing JSON responses from
//! the device. Each response type corresponds to a specific command or
//! status query.

mod power;
mod source;
mod status;
mod volume;

pub use power::PowerResponse;
pub use source::SourceResponse;
pub use status::{StatusPayload, StatusResponse};
pub use volume::{MuteResponse, VolumeResponse};
