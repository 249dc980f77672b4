// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands for infrared remotes.

use crate::command::{Command, CommandType};
use crate::registry::command_name::infrared as ir;
use crate::types::{AcFanSpeed, AcMode, PowerState, Temperature};

/// Command from the vendor's infrared command table.
///
/// # Examples
///
/// ```
/// use switchbot_client::command::{Command, InfraredCommand};
/// use switchbot_client::types::{AcFanSpeed, AcMode, PowerState, Temperature};
///
/// let cmd = InfraredCommand::SetAll {
///     temperature: Temperature::new(26.0).unwrap(),
///     mode: AcMode::Cool,
///     fan_speed: AcFanSpeed::Medium,
///     power: PowerState::On,
/// };
/// assert_eq!(cmd.name(), "setAll");
/// assert_eq!(cmd.parameter(), Some("26.0,2,3,on".to_string()));
///
/// let cmd = InfraredCommand::SetChannel(15);
/// assert_eq!(cmd.name(), "SetChannel");
/// assert_eq!(cmd.parameter(), Some("15".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InfraredCommand {
    /// Air conditioner: set every field at once.
    SetAll {
        /// Target temperature.
        temperature: Temperature,
        /// Operating mode.
        mode: AcMode,
        /// Fan speed.
        fan_speed: AcFanSpeed,
        /// Power state.
        power: PowerState,
    },
    /// TV family: jump to a channel.
    SetChannel(u32),
    /// Volume up.
    VolumeAdd,
    /// Volume down.
    VolumeSub,
    /// Next channel.
    ChannelAdd,
    /// Previous channel.
    ChannelSub,
    /// Toggle mute.
    SetMute,
    /// Fast forward.
    FastForward,
    /// Rewind.
    Rewind,
    /// Next track.
    Next,
    /// Previous track.
    Previous,
    /// Pause playback.
    Pause,
    /// Start playback.
    Play,
    /// Stop playback.
    Stop,
    /// Fan: toggle oscillation.
    Swing,
    /// Fan: cycle the timer.
    Timer,
    /// Fan: low speed.
    LowSpeed,
    /// Fan: middle speed.
    MiddleSpeed,
    /// Fan: high speed.
    HighSpeed,
    /// Light: brighter.
    BrightnessUp,
    /// Light: dimmer.
    BrightnessDown,
}

impl Command for InfraredCommand {
    fn name(&self) -> String {
        match self {
            Self::SetAll { .. } => ir::SET_ALL,
            Self::SetChannel(_) => ir::SET_CHANNEL,
            Self::VolumeAdd => ir::VOLUME_ADD,
            Self::VolumeSub => ir::VOLUME_SUB,
            Self::ChannelAdd => ir::CHANNEL_ADD,
            Self::ChannelSub => ir::CHANNEL_SUB,
            Self::SetMute => ir::SET_MUTE,
            Self::FastForward => ir::FAST_FORWARD,
            Self::Rewind => ir::REWIND,
            Self::Next => ir::NEXT,
            Self::Previous => ir::PREVIOUS,
            Self::Pause => ir::PAUSE,
            Self::Play => ir::PLAY,
            Self::Stop => ir::STOP,
            Self::Swing => ir::SWING,
            Self::Timer => ir::TIMER,
            Self::LowSpeed => ir::LOW_SPEED,
            Self::MiddleSpeed => ir::MIDDLE_SPEED,
            Self::HighSpeed => ir::HIGH_SPEED,
            Self::BrightnessUp => ir::BRIGHTNESS_UP,
            Self::BrightnessDown => ir::BRIGHTNESS_DOWN,
        }
        .to_string()
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::SetAll {
                temperature,
                mode,
                fan_speed,
                power,
            } => Some(format!("{temperature},{mode},{fan_speed},{power}")),
            Self::SetChannel(channel) => Some(channel.to_string()),
            _ => None,
        }
    }
}

/// User-defined button learned by an infrared remote.
///
/// Sent with `commandType: "customize"`; the command name is the button
/// label as configured in the SwitchBot app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCommand {
    button: String,
}

impl CustomCommand {
    /// Creates a command for the button labelled `button`.
    #[must_use]
    pub fn new(button: impl Into<String>) -> Self {
        Self {
            button: button.into(),
        }
    }

    /// Returns the button label.
    #[must_use]
    pub fn button(&self) -> &str {
        &self.button
    }
}

impl Command for CustomCommand {
    fn name(&self) -> String {
        self.button.clone()
    }

    fn parameter(&self) -> Option<String> {
        None
    }

    fn command_type(&self) -> CommandType {
        CommandType::Customize
    }
}
