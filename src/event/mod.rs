// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device events and the event bus.
//!
//! Drivers and the device manager publish [`DeviceEvent`]s on an
//! [`EventBus`]; the host subscribes and forwards the updates to the remote
//! hub. Every event carries the identifier of the device it concerns.

mod device_event;
mod event_bus;

pub use device_event::DeviceEvent;
pub use event_bus::EventBus;
