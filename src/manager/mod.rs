// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device manager for coordinating multiple drivers.
//!
//! The [`DeviceManager`] owns one [`Device`](crate::Device) per configured
//! entry and provides the host-side lifecycle the drivers themselves stay
//! free of:
//!
//! - **Centralized management**: add, remove, connect, and disconnect devices
//! - **Connection supervision**: initial verification with exponential
//!   backoff, then periodic background polls
//! - **State tracking**: per-device connection state and a `watch` channel
//!   with state snapshots
//! - **Event distribution**: all drivers publish on one shared event bus
//!
//! # Examples
//!
//! ```no_run
//! use medior_lib::config::DeviceConfig;
//! use medior_lib::manager::DeviceManager;
//!
//! #[tokio::main]
//! async fn main() -> medior_lib::Result<()> {
//!     let manager = DeviceManager::new();
//!
//!     // Subscribe to events
//!     let mut events = manager.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("Event: {event:?}");
//!         }
//!     });
//!
//!     // Add and connect a device
//!     let config = DeviceConfig::new("Living Room Player", "192.168.1.42");
//!     let identifier = manager.add_device(config).await?;
//!     manager.connect(&identifier).await?;
//!
//!     // Control the device
//!     manager.power_on(&identifier).await?;
//!
//!     Ok(())
//! }
//! ```

mod device_manager;
mod managed_device;
mod reconnection;

pub use device_manager::DeviceManager;
pub use managed_device::ConnectionState;
pub use reconnection::ReconnectionPolicy;
