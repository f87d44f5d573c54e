// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! The [`DeviceState`] struct is the driver's single source of truth for the
//! device, while [`StateChange`] represents individual changes that can be
//! applied to it. The entity state and the attribute bag the hub sees are
//! both derived from it, so they cannot diverge.
//!
//! # Examples
//!
//! ```
//! use medior_lib::state::{DeviceState, StateChange};
//! use medior_lib::types::PlayerState;
//!
//! let mut state = DeviceState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&StateChange::player(PlayerState::On)));
//! assert!(!state.apply(&StateChange::player(PlayerState::On)));
//!
//! assert_eq!(state.player(), Some(PlayerState::On));
//! assert_eq!(state.attributes().state, Some(PlayerState::On));
//! ```

mod device_state;
mod state_change;

pub use device_state::DeviceState;
pub use state_change::StateChange;
