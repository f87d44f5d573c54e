// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device configuration and persistence.
//!
//! [`DeviceConfig`] describes one configured device entry; [`ConfigStore`]
//! persists the configured entries to a JSON file and hands them to the
//! [`DeviceManager`](crate::manager::DeviceManager) on startup.

mod config_store;
mod device_config;

pub use config_store::ConfigStore;
pub use device_config::DeviceConfig;
