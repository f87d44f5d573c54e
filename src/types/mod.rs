// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for media-player device control.
//!
//! This module provides type-safe representations of values used in device
//! commands and reported state. Constrained types validate their values at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off/Toggle wire values for power and mute control
//! - [`PlayerState`] - The entity state reported to the remote hub
//! - [`Volume`] - Volume level (0-100) with step helpers

mod player_state;
mod power;
mod volume;

pub use player_state::PlayerState;
pub use power::PowerState;
pub use volume::Volume;
