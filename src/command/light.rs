// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light control commands for color bulbs and strip lights.

use crate::command::Command;
use crate::registry::command_name;
use crate::types::{Brightness, ColorTemperature, RgbColor};

/// Command to adjust a light.
///
/// # Examples
///
/// ```
/// use switchbot_client::command::{Command, LightCommand};
/// use switchbot_client::types::{Brightness, RgbColor};
///
/// let cmd = LightCommand::SetColor(RgbColor::new(255, 128, 0));
/// assert_eq!(cmd.name(), "setColor");
/// assert_eq!(cmd.parameter(), Some("255:128:0".to_string()));
///
/// let cmd = LightCommand::SetBrightness(Brightness::new(40).unwrap());
/// assert_eq!(cmd.parameter(), Some("40".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    /// Set brightness (1-100).
    SetBrightness(Brightness),
    /// Set RGB color.
    SetColor(RgbColor),
    /// Set white color temperature (2700-6500 K). Color Bulb only.
    SetColorTemperature(ColorTemperature),
}

impl Command for LightCommand {
    fn name(&self) -> String {
        match self {
            Self::SetBrightness(_) => command_name::SET_BRIGHTNESS,
            Self::SetColor(_) => command_name::SET_COLOR,
            Self::SetColorTemperature(_) => command_name::SET_COLOR_TEMPERATURE,
        }
        .to_string()
    }

    fn parameter(&self) -> Option<String> {
        Some(match self {
            Self::SetBrightness(brightness) => brightness.to_string(),
            Self::SetColor(color) => color.to_parameter(),
            Self::SetColorTemperature(kelvin) => kelvin.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_temperature_parameter() {
        let cmd = LightCommand::SetColorTemperature(ColorTemperature::new(3000).unwrap());
        assert_eq!(cmd.name(), "setColorTemperature");
        assert_eq!(cmd.parameter(), Some("3000".to_string()));
    }

    #[test]
    fn color_from_hex_parameter() {
        let cmd = LightCommand::SetColor(RgbColor::from_hex("#0a0b0c").unwrap());
        assert_eq!(cmd.parameter(), Some("10:11:12".to_string()));
    }
}
