// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Medior` Lib - a Rust library to integrate network media-player devices
//! with remote control hubs.
//!
//! The library implements the driver side of a hub integration for devices
//! controlled over stateless HTTP: every command is an independent request,
//! the driver tracks the last confirmed state, and state changes are
//! reported through an event bus the host forwards to the hub.
//!
//! # Supported Features
//!
//! - **Power control**: Turn devices on/off, toggle against tracked state
//! - **Volume control**: Absolute levels, stepped up/down, mute handling
//! - **Source selection**: Switch inputs, report the available source list
//! - **Status polling**: Connection verification and periodic state refresh
//! - **Device management**: Multiple devices, retry/backoff, shared events
//!
//! # Quick Start
//!
//! ## Driving a single device
//!
//! ```no_run
//! use medior_lib::config::DeviceConfig;
//! use medior_lib::Device;
//!
//! #[tokio::main]
//! async fn main() -> medior_lib::Result<()> {
//!     let config = DeviceConfig::new("Living Room Player", "192.168.1.42");
//!     let device = Device::from_config(&config)?;
//!
//!     // Check the device is reachable and pick up its current state
//!     device.verify_connection().await?;
//!
//!     // Basic power control
//!     device.power_on().await?;
//!
//!     // Attributes reported to the hub
//!     let attrs = device.get_device_attributes("media_player.living_room");
//!     println!("state: {:?}", attrs.state);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Managing configured devices
//!
//! ```no_run
//! use medior_lib::config::ConfigStore;
//! use medior_lib::manager::DeviceManager;
//!
//! #[tokio::main]
//! async fn main() -> medior_lib::Result<()> {
//!     let store = ConfigStore::load("devices.json")?;
//!     let manager = DeviceManager::new();
//!
//!     // Forward update events to the hub
//!     let mut events = manager.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("{}: {event:?}", event.identifier());
//!         }
//!     });
//!
//!     for identifier in manager.add_from_store(&store).await {
//!         manager.connect(&identifier).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Routing hub commands
//!
//! ```no_run
//! use medior_lib::device::CommandArgs;
//! use medior_lib::config::DeviceConfig;
//! use medior_lib::Device;
//! use serde_json::json;
//!
//! # async fn example() -> medior_lib::Result<()> {
//! let device = Device::from_config(&DeviceConfig::new("Player", "192.168.1.42"))?;
//!
//! let mut args = CommandArgs::new();
//! args.insert("volume".to_string(), json!(42));
//! device.send_command("volume", &args).await?;
//! # Ok(())
//! # }
//! ```

mod attributes;
pub mod command;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod manager;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use attributes::MediaPlayerAttributes;
pub use command::{Command, MuteCommand, PowerCommand, SourceCommand, StatusCommand, VolumeCommand};
pub use config::{ConfigStore, DeviceConfig};
pub use device::{CommandArgs, Device};
pub use error::{
    ConfigError, DeviceError, Error, ParseError, ProtocolError, Result, ValueError,
};
pub use event::{DeviceEvent, EventBus};
pub use manager::{ConnectionState, DeviceManager, ReconnectionPolicy};
pub use protocol::{CommandResponse, HttpClient, HttpConfig, Protocol};
pub use response::{MuteResponse, PowerResponse, SourceResponse, StatusResponse, VolumeResponse};
pub use state::{DeviceState, StateChange};
pub use types::{PlayerState, PowerState, Volume};
