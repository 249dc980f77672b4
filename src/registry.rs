// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed registry of vendor device types, remote types and command names.
//!
//! The strings in this module are the exact values the API uses, including
//! casing and spacing (`"Hub Mini"`, `"Plug Mini (US)"`, `"IPTV/Streamer"`).

use std::fmt;
use std::str::FromStr;

use crate::error::DeviceError;

/// Command names accepted by the commands endpoint.
pub mod command_name {
    /// `turnOn`
    pub const TURN_ON: &str = "turnOn";
    /// `turnOff`
    pub const TURN_OFF: &str = "turnOff";
    /// `toggle`
    pub const TOGGLE: &str = "toggle";
    /// `press`
    pub const PRESS: &str = "press";
    /// `setPosition`
    pub const SET_POSITION: &str = "setPosition";
    /// `pause`
    pub const PAUSE: &str = "pause";
    /// `lock`
    pub const LOCK: &str = "lock";
    /// `unlock`
    pub const UNLOCK: &str = "unlock";
    /// `setMode`
    pub const SET_MODE: &str = "setMode";
    /// `setAllStatus`
    pub const SET_ALL_STATUS: &str = "setAllStatus";
    /// `setBrightness`
    pub const SET_BRIGHTNESS: &str = "setBrightness";
    /// `setColor`
    pub const SET_COLOR: &str = "setColor";
    /// `setColorTemperature`
    pub const SET_COLOR_TEMPERATURE: &str = "setColorTemperature";
    /// `start`
    pub const START: &str = "start";
    /// `stop`
    pub const STOP: &str = "stop";
    /// `dock`
    pub const DOCK: &str = "dock";
    /// `PowLevel`
    pub const POW_LEVEL: &str = "PowLevel";

    /// Infrared remote commands.
    pub mod infrared {
        pub use super::{TURN_OFF, TURN_ON};

        /// `setAll`
        pub const SET_ALL: &str = "setAll";
        /// `SetChannel`
        pub const SET_CHANNEL: &str = "SetChannel";
        /// `volumeAdd`
        pub const VOLUME_ADD: &str = "volumeAdd";
        /// `volumeSub`
        pub const VOLUME_SUB: &str = "volumeSub";
        /// `channelAdd`
        pub const CHANNEL_ADD: &str = "channelAdd";
        /// `channelSub`
        pub const CHANNEL_SUB: &str = "channelSub";
        /// `setMute`
        pub const SET_MUTE: &str = "setMute";
        /// `FastForward`
        pub const FAST_FORWARD: &str = "FastForward";
        /// `Rewind`
        pub const REWIND: &str = "Rewind";
        /// `Next`
        pub const NEXT: &str = "Next";
        /// `Previous`
        pub const PREVIOUS: &str = "Previous";
        /// `Pause`
        pub const PAUSE: &str = "Pause";
        /// `Play`
        pub const PLAY: &str = "Play";
        /// `Stop`
        pub const STOP: &str = "Stop";
        /// `swing`
        pub const SWING: &str = "swing";
        /// `timer`
        pub const TIMER: &str = "timer";
        /// `lowSpeed`
        pub const LOW_SPEED: &str = "lowSpeed";
        /// `middleSpeed`
        pub const MIDDLE_SPEED: &str = "middleSpeed";
        /// `highSpeed`
        pub const HIGH_SPEED: &str = "highSpeed";
        /// `brightnessUp`
        pub const BRIGHTNESS_UP: &str = "brightnessUp";
        /// `brightnessDown`
        pub const BRIGHTNESS_DOWN: &str = "brightnessDown";
    }
}

use command_name as cmd;
use command_name::infrared as ir;

// ============================================================================
// DeviceType
// ============================================================================

/// Physical device types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// `Hub`
    Hub,
    /// `Hub Plus`
    HubPlus,
    /// `Hub Mini`
    HubMini,
    /// `Hub 2`
    Hub2,
    /// `Bot`
    Bot,
    /// `Plug`
    Plug,
    /// `Plug Mini (US)`
    PlugMiniUs,
    /// `Plug Mini (JP)`
    PlugMiniJp,
    /// `Curtain`
    Curtain,
    /// `Meter`
    Meter,
    /// `MeterPlus`
    MeterPlus,
    /// `Motion Sensor`
    MotionSensor,
    /// `Contact Sensor`
    ContactSensor,
    /// `Color Bulb`
    ColorBulb,
    /// `Humidifier`
    Humidifier,
    /// `Smart Fan`
    SmartFan,
    /// `Strip Light`
    StripLight,
    /// `Indoor Cam`
    IndoorCam,
    /// `Remote` (the physical button remote, not an infrared device)
    Remote,
    /// `Smart Lock`
    SmartLock,
    /// `Robot Vacuum Cleaner S1`
    RobotVacuumCleanerS1,
    /// `Robot Vacuum Cleaner S1 Plus`
    RobotVacuumCleanerS1Plus,
}

impl DeviceType {
    /// Every physical device type.
    pub const ALL: [Self; 22] = [
        Self::Hub,
        Self::HubPlus,
        Self::HubMini,
        Self::Hub2,
        Self::Bot,
        Self::Plug,
        Self::PlugMiniUs,
        Self::PlugMiniJp,
        Self::Curtain,
        Self::Meter,
        Self::MeterPlus,
        Self::MotionSensor,
        Self::ContactSensor,
        Self::ColorBulb,
        Self::Humidifier,
        Self::SmartFan,
        Self::StripLight,
        Self::IndoorCam,
        Self::Remote,
        Self::SmartLock,
        Self::RobotVacuumCleanerS1,
        Self::RobotVacuumCleanerS1Plus,
    ];

    /// Returns the vendor string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hub => "Hub",
            Self::HubPlus => "Hub Plus",
            Self::HubMini => "Hub Mini",
            Self::Hub2 => "Hub 2",
            Self::Bot => "Bot",
            Self::Plug => "Plug",
            Self::PlugMiniUs => "Plug Mini (US)",
            Self::PlugMiniJp => "Plug Mini (JP)",
            Self::Curtain => "Curtain",
            Self::Meter => "Meter",
            Self::MeterPlus => "MeterPlus",
            Self::MotionSensor => "Motion Sensor",
            Self::ContactSensor => "Contact Sensor",
            Self::ColorBulb => "Color Bulb",
            Self::Humidifier => "Humidifier",
            Self::SmartFan => "Smart Fan",
            Self::StripLight => "Strip Light",
            Self::IndoorCam => "Indoor Cam",
            Self::Remote => "Remote",
            Self::SmartLock => "Smart Lock",
            Self::RobotVacuumCleanerS1 => "Robot Vacuum Cleaner S1",
            Self::RobotVacuumCleanerS1Plus => "Robot Vacuum Cleaner S1 Plus",
        }
    }

    /// Returns the command names this type accepts.
    #[must_use]
    pub const fn supported_commands(&self) -> &'static [&'static str] {
        match self {
            Self::Hub
            | Self::HubPlus
            | Self::HubMini
            | Self::Hub2
            | Self::Meter
            | Self::MeterPlus
            | Self::MotionSensor
            | Self::ContactSensor
            | Self::IndoorCam
            | Self::Remote => &[],
            Self::Bot => &[cmd::TURN_ON, cmd::TURN_OFF, cmd::PRESS],
            Self::Plug => &[cmd::TURN_ON, cmd::TURN_OFF],
            Self::PlugMiniUs | Self::PlugMiniJp => &[cmd::TURN_ON, cmd::TURN_OFF, cmd::TOGGLE],
            Self::Curtain => &[cmd::TURN_ON, cmd::TURN_OFF, cmd::SET_POSITION, cmd::PAUSE],
            Self::ColorBulb => &[
                cmd::TURN_ON,
                cmd::TURN_OFF,
                cmd::SET_BRIGHTNESS,
                cmd::SET_COLOR,
                cmd::SET_COLOR_TEMPERATURE,
            ],
            Self::Humidifier => &[cmd::TURN_ON, cmd::TURN_OFF, cmd::SET_MODE],
            Self::SmartFan => &[cmd::TURN_ON, cmd::TURN_OFF, cmd::SET_ALL_STATUS],
            Self::StripLight => &[
                cmd::TURN_ON,
                cmd::TURN_OFF,
                cmd::TOGGLE,
                cmd::SET_BRIGHTNESS,
                cmd::SET_COLOR,
            ],
            Self::SmartLock => &[cmd::LOCK, cmd::UNLOCK],
            Self::RobotVacuumCleanerS1 | Self::RobotVacuumCleanerS1Plus => {
                &[cmd::START, cmd::STOP, cmd::DOCK, cmd::POW_LEVEL]
            }
        }
    }

    /// Returns `true` if the vendor has a dedicated `toggle` command.
    #[must_use]
    pub fn has_toggle_command(&self) -> bool {
        self.supported_commands().contains(&cmd::TOGGLE)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|device_type| device_type.as_str() == s)
            .ok_or_else(|| DeviceError::UnknownDeviceType(s.to_string()))
    }
}

// ============================================================================
// RemoteType
// ============================================================================

/// Infrared remote types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteType {
    /// `Air Conditioner`
    AirConditioner,
    /// `TV`
    Tv,
    /// `Light`
    Light,
    /// `IPTV/Streamer`
    IptvStreamer,
    /// `Set Top Box`
    SetTopBox,
    /// `DVD`
    Dvd,
    /// `Fan`
    Fan,
    /// `Projector`
    Projector,
    /// `Camera`
    Camera,
    /// `Air Purifier`
    AirPurifier,
    /// `Speaker`
    Speaker,
    /// `Water Heater`
    WaterHeater,
    /// `Vacuum Cleaner`
    VacuumCleaner,
    /// `Others`
    Others,
}

impl RemoteType {
    /// Every infrared remote type.
    pub const ALL: [Self; 14] = [
        Self::AirConditioner,
        Self::Tv,
        Self::Light,
        Self::IptvStreamer,
        Self::SetTopBox,
        Self::Dvd,
        Self::Fan,
        Self::Projector,
        Self::Camera,
        Self::AirPurifier,
        Self::Speaker,
        Self::WaterHeater,
        Self::VacuumCleaner,
        Self::Others,
    ];

    /// Returns the vendor string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AirConditioner => "Air Conditioner",
            Self::Tv => "TV",
            Self::Light => "Light",
            Self::IptvStreamer => "IPTV/Streamer",
            Self::SetTopBox => "Set Top Box",
            Self::Dvd => "DVD",
            Self::Fan => "Fan",
            Self::Projector => "Projector",
            Self::Camera => "Camera",
            Self::AirPurifier => "Air Purifier",
            Self::Speaker => "Speaker",
            Self::WaterHeater => "Water Heater",
            Self::VacuumCleaner => "Vacuum Cleaner",
            Self::Others => "Others",
        }
    }

    /// Returns the command names this remote accepts, excluding custom
    /// buttons.
    #[must_use]
    pub const fn supported_commands(&self) -> &'static [&'static str] {
        match self {
            Self::AirConditioner => &[ir::TURN_ON, ir::TURN_OFF, ir::SET_ALL],
            Self::Tv | Self::IptvStreamer | Self::SetTopBox => &[
                ir::TURN_ON,
                ir::TURN_OFF,
                ir::SET_CHANNEL,
                ir::VOLUME_ADD,
                ir::VOLUME_SUB,
                ir::CHANNEL_ADD,
                ir::CHANNEL_SUB,
            ],
            Self::Dvd | Self::Speaker => &[
                ir::TURN_ON,
                ir::TURN_OFF,
                ir::SET_MUTE,
                ir::FAST_FORWARD,
                ir::REWIND,
                ir::NEXT,
                ir::PREVIOUS,
                ir::PAUSE,
                ir::PLAY,
                ir::STOP,
                ir::VOLUME_ADD,
                ir::VOLUME_SUB,
            ],
            Self::Fan => &[
                ir::TURN_ON,
                ir::TURN_OFF,
                ir::SWING,
                ir::TIMER,
                ir::LOW_SPEED,
                ir::MIDDLE_SPEED,
                ir::HIGH_SPEED,
            ],
            Self::Light => &[
                ir::TURN_ON,
                ir::TURN_OFF,
                ir::BRIGHTNESS_UP,
                ir::BRIGHTNESS_DOWN,
            ],
            Self::Projector
            | Self::Camera
            | Self::AirPurifier
            | Self::WaterHeater
            | Self::VacuumCleaner
            | Self::Others => &[ir::TURN_ON, ir::TURN_OFF],
        }
    }
}

impl fmt::Display for RemoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemoteType {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|remote_type| remote_type.as_str() == s)
            .ok_or_else(|| DeviceError::UnknownRemoteType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn device_type_strings_are_unique_and_parse_back() {
        let strings: HashSet<_> = DeviceType::ALL.iter().map(DeviceType::as_str).collect();
        assert_eq!(strings.len(), DeviceType::ALL.len());

        for device_type in DeviceType::ALL {
            assert_eq!(device_type.as_str().parse::<DeviceType>().unwrap(), device_type);
        }
    }

    #[test]
    fn remote_type_strings_are_unique_and_parse_back() {
        let strings: HashSet<_> = RemoteType::ALL.iter().map(RemoteType::as_str).collect();
        assert_eq!(strings.len(), RemoteType::ALL.len());

        for remote_type in RemoteType::ALL {
            assert_eq!(remote_type.as_str().parse::<RemoteType>().unwrap(), remote_type);
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert!("hub mini".parse::<DeviceType>().is_err());
        assert!("Plug Mini".parse::<DeviceType>().is_err());
        assert!(matches!(
            "Toaster".parse::<DeviceType>(),
            Err(DeviceError::UnknownDeviceType(s)) if s == "Toaster"
        ));
        assert!(matches!(
            "tv".parse::<RemoteType>(),
            Err(DeviceError::UnknownRemoteType(_))
        ));
    }

    #[test]
    fn robot_vacuum_labels_match_models() {
        assert_eq!(
            DeviceType::RobotVacuumCleanerS1.as_str(),
            "Robot Vacuum Cleaner S1"
        );
        assert_eq!(
            DeviceType::RobotVacuumCleanerS1Plus.as_str(),
            "Robot Vacuum Cleaner S1 Plus"
        );
    }

    #[test]
    fn dedicated_toggle() {
        let with_toggle: Vec<_> = DeviceType::ALL
            .into_iter()
            .filter(DeviceType::has_toggle_command)
            .collect();
        assert_eq!(
            with_toggle,
            vec![
                DeviceType::PlugMiniUs,
                DeviceType::PlugMiniJp,
                DeviceType::StripLight
            ]
        );
    }

    #[test]
    fn every_remote_turns_on_and_off() {
        for remote_type in RemoteType::ALL {
            let commands = remote_type.supported_commands();
            assert!(commands.contains(&ir::TURN_ON), "{remote_type}");
            assert!(commands.contains(&ir::TURN_OFF), "{remote_type}");
        }
    }
}
