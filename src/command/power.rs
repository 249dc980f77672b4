// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control commands.

use crate::command::Command;
use crate::registry::command_name;
use crate::types::PowerState;

/// Command to change device power state.
///
/// Shared by physical devices and infrared remotes, which use the same
/// `turnOn` / `turnOff` names.
///
/// # Examples
///
/// ```
/// use switchbot_client::command::{Command, PowerCommand};
/// use switchbot_client::types::PowerState;
///
/// let cmd = PowerCommand::set(PowerState::On);
/// assert_eq!(cmd.name(), "turnOn");
/// assert_eq!(cmd.parameter(), None);
///
/// assert_eq!(PowerCommand::Toggle.name(), "toggle");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommand {
    /// Turn the device on.
    TurnOn,
    /// Turn the device off.
    TurnOff,
    /// Dedicated vendor toggle (Plug Mini, Strip Light only).
    Toggle,
}

impl PowerCommand {
    /// Creates the command that drives the device into `state`.
    #[must_use]
    pub const fn set(state: PowerState) -> Self {
        match state {
            PowerState::On => Self::TurnOn,
            PowerState::Off => Self::TurnOff,
        }
    }
}

impl Command for PowerCommand {
    fn name(&self) -> String {
        match self {
            Self::TurnOn => command_name::TURN_ON,
            Self::TurnOff => command_name::TURN_OFF,
            Self::Toggle => command_name::TOGGLE,
        }
        .to_string()
    }

    fn parameter(&self) -> Option<String> {
        None
    }
}
