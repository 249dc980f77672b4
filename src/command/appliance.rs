// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Family-specific commands for physical appliances.

use crate::command::Command;
use crate::registry::command_name;
use crate::types::{
    CurtainMode, FanMode, FanSpeed, HumidifierMode, PowLevel, PowerState, ShakeRange,
    SlidePosition,
};

/// Bot commands beyond on/off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    /// Press the button once.
    Press,
}

impl Command for BotCommand {
    fn name(&self) -> String {
        match self {
            Self::Press => command_name::PRESS.to_string(),
        }
    }

    fn parameter(&self) -> Option<String> {
        None
    }
}

/// Curtain commands beyond on/off.
///
/// `setPosition` takes `"{index},{mode},{position}"`, where `index` selects
/// the curtain in a group (usually `0`).
///
/// # Examples
///
/// ```
/// use switchbot_client::command::{Command, CurtainCommand};
/// use switchbot_client::types::{CurtainMode, SlidePosition};
///
/// let cmd = CurtainCommand::SetPosition {
///     index: 0,
///     mode: CurtainMode::Default,
///     position: SlidePosition::new(100).unwrap(),
/// };
/// assert_eq!(cmd.parameter(), Some("0,ff,100".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurtainCommand {
    /// Move to a position.
    SetPosition {
        /// Curtain index in a group.
        index: u8,
        /// Motor mode.
        mode: CurtainMode,
        /// Target position, 0 open and 100 closed.
        position: SlidePosition,
    },
    /// Stop moving.
    Pause,
}

impl Command for CurtainCommand {
    fn name(&self) -> String {
        match self {
            Self::SetPosition { .. } => command_name::SET_POSITION,
            Self::Pause => command_name::PAUSE,
        }
        .to_string()
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::SetPosition {
                index,
                mode,
                position,
            } => Some(format!("{index},{mode},{position}")),
            Self::Pause => None,
        }
    }
}

/// Humidifier `setMode` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidifierCommand {
    /// Switch mode or atomization efficiency.
    SetMode(HumidifierMode),
}

impl Command for HumidifierCommand {
    fn name(&self) -> String {
        match self {
            Self::SetMode(_) => command_name::SET_MODE.to_string(),
        }
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::SetMode(mode) => Some(mode.to_string()),
        }
    }
}

/// Smart fan `setAllStatus` command.
///
/// The vendor only offers a combined setter, so every field must be sent.
///
/// # Examples
///
/// ```
/// use switchbot_client::command::{Command, SmartFanCommand};
/// use switchbot_client::types::{FanMode, FanSpeed, PowerState, ShakeRange};
///
/// let cmd = SmartFanCommand::SetAllStatus {
///     power: PowerState::On,
///     mode: FanMode::Natural,
///     speed: FanSpeed::new(3).unwrap(),
///     shake_range: ShakeRange::new(60).unwrap(),
/// };
/// assert_eq!(cmd.name(), "setAllStatus");
/// assert_eq!(cmd.parameter(), Some("on,2,3,60".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartFanCommand {
    /// Set power, mode, speed and oscillation range at once.
    SetAllStatus {
        /// Power state.
        power: PowerState,
        /// Fan mode.
        mode: FanMode,
        /// Fan speed.
        speed: FanSpeed,
        /// Oscillation range.
        shake_range: ShakeRange,
    },
}

impl Command for SmartFanCommand {
    fn name(&self) -> String {
        match self {
            Self::SetAllStatus { .. } => command_name::SET_ALL_STATUS.to_string(),
        }
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::SetAllStatus {
                power,
                mode,
                speed,
                shake_range,
            } => Some(format!("{power},{mode},{speed},{shake_range}")),
        }
    }
}

/// Smart lock commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockCommand {
    /// Lock the door.
    Lock,
    /// Unlock the door.
    Unlock,
}

impl Command for LockCommand {
    fn name(&self) -> String {
        match self {
            Self::Lock => command_name::LOCK,
            Self::Unlock => command_name::UNLOCK,
        }
        .to_string()
    }

    fn parameter(&self) -> Option<String> {
        None
    }
}

/// Robot vacuum cleaner commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotVacuumCommand {
    /// Start cleaning.
    Start,
    /// Stop cleaning.
    Stop,
    /// Return to the charging dock.
    Dock,
    /// Set suction power level.
    PowLevel(PowLevel),
}

impl Command for RobotVacuumCommand {
    fn name(&self) -> String {
        match self {
            Self::Start => command_name::START,
            Self::Stop => command_name::STOP,
            Self::Dock => command_name::DOCK,
            Self::PowLevel(_) => command_name::POW_LEVEL,
        }
        .to_string()
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::PowLevel(level) => Some(level.to_string()),
            Self::Start | Self::Stop | Self::Dock => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curtain_set_position_parameter() {
        let cmd = CurtainCommand::SetPosition {
            index: 1,
            mode: "0".parse().unwrap(),
            position: SlidePosition::new(50).unwrap(),
        };
        assert_eq!(cmd.name(), "setPosition");
        assert_eq!(cmd.parameter(), Some("1,0,50".to_string()));
    }

    #[test]
    fn curtain_pause() {
        assert_eq!(CurtainCommand::Pause.name(), "pause");
        assert_eq!(CurtainCommand::Pause.parameter(), None);
    }

    #[test]
    fn humidifier_modes() {
        let cmd = HumidifierCommand::SetMode(HumidifierMode::Auto);
        assert_eq!(cmd.name(), "setMode");
        assert_eq!(cmd.parameter(), Some("auto".to_string()));

        let cmd = HumidifierCommand::SetMode(HumidifierMode::efficiency(80).unwrap());
        assert_eq!(cmd.parameter(), Some("80".to_string()));
    }

    #[test]
    fn bot_and_lock() {
        assert_eq!(BotCommand::Press.name(), "press");
        assert_eq!(LockCommand::Lock.name(), "lock");
        assert_eq!(LockCommand::Unlock.name(), "unlock");
        assert_eq!(LockCommand::Unlock.parameter(), None);
    }

    #[test]
    fn robot_vacuum_commands() {
        assert_eq!(RobotVacuumCommand::Dock.name(), "dock");
        let cmd = RobotVacuumCommand::PowLevel(PowLevel::new(2).unwrap());
        assert_eq!(cmd.name(), "PowLevel");
        assert_eq!(cmd.parameter(), Some("2".to_string()));
        assert_eq!(RobotVacuumCommand::Start.parameter(), None);
    }
}
