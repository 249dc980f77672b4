// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart fan.
//!
//! The fan only has a combined `setAllStatus` command. Single-field setters
//! read the current status and resend the other fields unchanged.

use crate::capabilities::{Controllable, StatusReadable};
use crate::command::SmartFanCommand;
use crate::error::{Result, ValueError};
use crate::protocol::{CommandResult, Protocol};
use crate::response::{SmartFanState, Status};
use crate::types::{FanMode, FanSpeed, PowerState, ShakeRange};

physical_wrapper! {
    /// Smart fan.
    SmartFan => [SmartFan]
}

/// Fields of `setAllStatus`, typed.
struct Settings {
    power: PowerState,
    mode: FanMode,
    speed: FanSpeed,
    shake_range: ShakeRange,
}

impl Settings {
    fn from_state(state: &SmartFanState) -> std::result::Result<Self, ValueError> {
        Ok(Self {
            power: state.power,
            mode: FanMode::try_from(state.mode)?,
            speed: FanSpeed::new(reported_byte(state.speed)?)?,
            shake_range: ShakeRange::new(reported_byte(state.shake_range)?)?,
        })
    }
}

fn reported_byte(value: i64) -> std::result::Result<u8, ValueError> {
    u8::try_from(value).map_err(|_| ValueError::OutOfRange {
        min: 0,
        max: u16::from(u8::MAX),
        actual: u16::try_from(value.max(0)).unwrap_or(u16::MAX),
    })
}

impl<P: Protocol> SmartFan<P> {
    /// Sets every field at once.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_all_status(
        &self,
        power: PowerState,
        mode: FanMode,
        speed: FanSpeed,
        shake_range: ShakeRange,
    ) -> Result<CommandResult> {
        self.core
            .send(&SmartFanCommand::SetAllStatus {
                power,
                mode,
                speed,
                shake_range,
            })
            .await
    }

    /// Changes the mode, keeping the other fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the status read, or the command, fails.
    pub async fn set_fan_mode(&self, mode: FanMode) -> Result<CommandResult> {
        let current = self.settings().await?;
        self.set_all_status(current.power, mode, current.speed, current.shake_range)
            .await
    }

    /// Changes the speed, keeping the other fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the status read, or the command, fails.
    pub async fn set_fan_speed(&self, speed: FanSpeed) -> Result<CommandResult> {
        let current = self.settings().await?;
        self.set_all_status(current.power, current.mode, speed, current.shake_range)
            .await
    }

    /// Changes the oscillation range, keeping the other fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the status read, or the command, fails.
    pub async fn set_shake_range(&self, shake_range: ShakeRange) -> Result<CommandResult> {
        let current = self.settings().await?;
        self.set_all_status(current.power, current.mode, current.speed, shake_range)
            .await
    }

    async fn settings(&self) -> Result<Settings> {
        let status = self.status().await?;
        Ok(Settings::from_state(&status)?)
    }
}

impl<P: Protocol> StatusReadable for SmartFan<P> {
    type Status = Status<SmartFanState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

impl<P: Protocol> Controllable for SmartFan<P> {
    async fn is_turned_on(&self) -> Result<bool> {
        Ok(self.status().await?.power.is_on())
    }
}
