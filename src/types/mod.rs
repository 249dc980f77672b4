// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for SwitchBot device control.
//!
//! Each type checks its range at construction time and knows how to render
//! itself in the exact string format the API expects in a command
//! `parameter`.
//!
//! # Types
//!
//! - [`PowerState`] - `on` / `off`
//! - [`RgbColor`] - 8-bit RGB, rendered as `r:g:b`
//! - [`Brightness`], [`ColorTemperature`], [`SlidePosition`], [`ShakeRange`],
//!   [`FanSpeed`], [`PowLevel`] - bounded integers
//! - [`CurtainMode`], [`HumidifierMode`], [`FanMode`] - family-specific modes
//! - [`AcMode`], [`AcFanSpeed`], [`Temperature`] - air conditioner settings

mod climate;
mod level;
mod mode;
mod power;
mod rgb_color;

pub use climate::{AcFanSpeed, AcMode, Temperature};
pub use level::{Brightness, ColorTemperature, FanSpeed, PowLevel, ShakeRange, SlidePosition};
pub use mode::{CurtainMode, FanMode, HumidifierMode};
pub use power::PowerState;
pub use rgb_color::RgbColor;
