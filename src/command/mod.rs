// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SwitchBot command definitions.
//!
//! Every control operation ends up as a `POST devices/{id}/commands` with a
//! body of the form:
//!
//! ```json
//! {"command": "setPosition", "parameter": "0,ff,50"}
//! ```
//!
//! The types in this module own the exact string formatting of `parameter`
//! for each family, so the device wrappers never build those strings by
//! hand.
//!
//! # Available Commands
//!
//! | Command Type | Families | Example |
//! |-------------|---------|---------|
//! | [`PowerCommand`] | all controllable devices | `turnOn`, `toggle` |
//! | [`LightCommand`] | Color Bulb, Strip Light | `setColor` `255:0:0` |
//! | [`BotCommand`] | Bot | `press` |
//! | [`CurtainCommand`] | Curtain | `setPosition` `0,ff,50` |
//! | [`HumidifierCommand`] | Humidifier | `setMode` `auto` |
//! | [`SmartFanCommand`] | Smart Fan | `setAllStatus` `on,1,2,60` |
//! | [`LockCommand`] | Smart Lock | `lock` |
//! | [`RobotVacuumCommand`] | Robot Vacuum Cleaner S1 / S1 Plus | `PowLevel` `2` |
//! | [`InfraredCommand`] | infrared remotes | `setAll` `26.0,2,3,on` |
//! | [`CustomCommand`] | infrared remotes | user-defined button |
//!
//! # Examples
//!
//! ```
//! use switchbot_client::command::{Command, CurtainCommand};
//! use switchbot_client::types::{CurtainMode, SlidePosition};
//!
//! let cmd = CurtainCommand::SetPosition {
//!     index: 1,
//!     mode: CurtainMode::Performance,
//!     position: SlidePosition::new(50).unwrap(),
//! };
//!
//! assert_eq!(cmd.name(), "setPosition");
//! assert_eq!(cmd.parameter(), Some("1,0,50".to_string()));
//! ```

mod appliance;
mod infrared;
mod light;
mod power;

pub use appliance::{
    BotCommand, CurtainCommand, HumidifierCommand, LockCommand, RobotVacuumCommand,
    SmartFanCommand,
};
pub use infrared::{CustomCommand, InfraredCommand};
pub use light::LightCommand;
pub use power::PowerCommand;

use serde::Serialize;

/// Value of the `commandType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    /// A command from the vendor's command table.
    #[default]
    Command,
    /// A user-defined button of an infrared remote.
    Customize,
}

impl CommandType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Customize => "customize",
        }
    }
}

/// A command that can be sent to a SwitchBot device.
pub trait Command {
    /// Returns the command name, e.g. `"turnOn"` or `"setPosition"`.
    fn name(&self) -> String;

    /// Returns the command parameter, if any.
    fn parameter(&self) -> Option<String>;

    /// Returns the command type.
    fn command_type(&self) -> CommandType {
        CommandType::Command
    }

    /// Builds the request body for the commands endpoint.
    fn to_payload(&self) -> CommandPayload {
        CommandPayload::new(self.name(), self.parameter(), self.command_type())
    }
}

/// JSON body of `POST devices/{id}/commands`.
///
/// `commandType` is omitted for regular commands, matching what the vendor
/// assumes when the field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandPayload {
    /// Command name.
    pub command: String,
    /// Command parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// Command type, absent for [`CommandType::Command`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_type: Option<CommandType>,
}

impl CommandPayload {
    /// Creates a payload.
    #[must_use]
    pub fn new(
        command: impl Into<String>,
        parameter: Option<String>,
        command_type: CommandType,
    ) -> Self {
        Self {
            command: command.into(),
            parameter,
            command_type: match command_type {
                CommandType::Command => None,
                CommandType::Customize => Some(command_type),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn payload_omits_absent_fields() {
        let payload = PowerCommand::TurnOn.to_payload();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"command": "turnOn"})
        );
    }

    #[test]
    fn payload_with_parameter() {
        let payload = CommandPayload::new("setMode", Some("auto".to_string()), CommandType::Command);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"command": "setMode", "parameter": "auto"})
        );
    }

    #[test]
    fn payload_customize() {
        let payload = CustomCommand::new("Mood Light").to_payload();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"command": "Mood Light", "commandType": "customize"})
        );
    }

    #[test]
    fn command_type_strings() {
        assert_eq!(CommandType::Command.as_str(), "command");
        assert_eq!(CommandType::Customize.as_str(), "customize");
    }
}
