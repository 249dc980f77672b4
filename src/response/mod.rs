// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for SwitchBot JSON payloads.
//!
//! [`DeviceStatus`] holds what every status response shares. Family-specific
//! fields are projected into a [`Status<T>`] whose `T` is one of the
//! `*State` structs.

mod family;
mod status;

pub use family::{
    BotState, ColorBulbState, ContactSensorState, CurtainState, HumidifierState, LockState,
    MeterState, MotionSensorState, PlugMiniState, PlugState, RobotVacuumState, SmartFanState,
    StripLightState,
};
pub use status::{DeviceStatus, Status};
