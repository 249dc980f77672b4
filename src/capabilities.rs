// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability traits implemented by device wrappers.
//!
//! Every wrapper is a [`DeviceHandle`], which gives access to identity and
//! to the raw `command` primitive. Optional behavior is layered on top:
//!
//! | Trait | Implemented by | Provides |
//! |-------|----------------|----------|
//! | [`StatusReadable`] | physical devices | typed `status()` |
//! | [`Controllable`] | physical devices with power | `turn_on`, `turn_off`, `toggle` |
//! | [`PseudoStatusBacked`] | infrared remotes | memorized power, `toggle` |
//!
//! Bring the traits into scope to call these methods:
//!
//! ```no_run
//! use switchbot_client::capabilities::{Controllable, StatusReadable};
//! # async fn demo(bot: switchbot_client::device::Bot<switchbot_client::protocol::HttpClient>)
//! # -> switchbot_client::Result<()> {
//! let result = bot.toggle().await?;
//! let status = bot.status().await?;
//! println!("{} -> {}", result.message, status.power);
//! # Ok(())
//! # }
//! ```

use crate::command::{Command, CommandType, PowerCommand};
use crate::device::{DeviceCore, DeviceInfo};
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};
use crate::state::{PseudoStatus, StateChange};
use crate::types::PowerState;

/// Base trait of every device wrapper.
#[allow(async_fn_in_trait)]
pub trait DeviceHandle {
    /// Transport type.
    type Protocol: Protocol;

    /// Returns the shared device core.
    fn core(&self) -> &DeviceCore<Self::Protocol>;

    /// Returns the device identity.
    fn info(&self) -> &DeviceInfo {
        self.core().info()
    }

    /// Sends a raw command.
    ///
    /// Non-success vendor codes are returned in the result, not as errors.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    async fn command(
        &self,
        name: &str,
        parameter: Option<&str>,
        command_type: CommandType,
    ) -> Result<CommandResult> {
        self.core().command(name, parameter, command_type).await
    }
}

/// Devices whose status can be fetched.
#[allow(async_fn_in_trait)]
pub trait StatusReadable: DeviceHandle {
    /// Typed status.
    type Status;

    /// Fetches and projects the current status.
    ///
    /// # Errors
    ///
    /// - `DeviceError::StatusUnavailable` if the API answers code 190
    /// - `ParseError` if a required field is missing
    async fn status(&self) -> Result<Self::Status>;
}

/// Physical devices that can be switched on and off.
#[allow(async_fn_in_trait)]
pub trait Controllable: DeviceHandle {
    /// Reads whether the device is currently on.
    ///
    /// # Errors
    ///
    /// Returns an error if the status cannot be fetched or parsed.
    async fn is_turned_on(&self) -> Result<bool>;

    /// Sends `turnOn`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    async fn turn_on(&self) -> Result<CommandResult> {
        self.core().send(&PowerCommand::TurnOn).await
    }

    /// Sends `turnOff`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    async fn turn_off(&self) -> Result<CommandResult> {
        self.core().send(&PowerCommand::TurnOff).await
    }

    /// Flips the power state.
    ///
    /// The default reads the current state and sends the opposite command.
    /// Families with a vendor `toggle` command override this.
    ///
    /// # Errors
    ///
    /// Returns an error if the status read or the command fails.
    async fn toggle(&self) -> Result<CommandResult> {
        if self.is_turned_on().await? {
            self.turn_off().await
        } else {
            self.turn_on().await
        }
    }
}

/// Infrared remotes, whose state is only known locally.
#[allow(async_fn_in_trait)]
pub trait PseudoStatusBacked: DeviceHandle {
    /// Returns the memorized status.
    fn pseudo_status(&self) -> &PseudoStatus;

    /// Returns the memorized status for update.
    fn pseudo_status_mut(&mut self) -> &mut PseudoStatus;

    /// Sends `command` and memorizes `change` if the API reported success.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure, in which case
    /// nothing is memorized.
    async fn send_memorized<C: Command>(
        &mut self,
        command: &C,
        change: StateChange,
    ) -> Result<CommandResult> {
        let result = self.core().send(command).await?;
        if result.is_success() {
            self.pseudo_status_mut().apply(&change);
        } else {
            tracing::debug!(
                device_id = %self.info().device_id(),
                status_code = result.status_code,
                "Command not accepted, pseudo status unchanged"
            );
        }
        Ok(result)
    }

    /// Sends `turnOn` and memorizes `on`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    async fn turn_on(&mut self) -> Result<CommandResult> {
        self.send_memorized(&PowerCommand::TurnOn, StateChange::Power(PowerState::On))
            .await
    }

    /// Sends `turnOff` and memorizes `off`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    async fn turn_off(&mut self) -> Result<CommandResult> {
        self.send_memorized(&PowerCommand::TurnOff, StateChange::Power(PowerState::Off))
            .await
    }

    /// Flips the memorized power state. Unknown counts as off.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    async fn toggle(&mut self) -> Result<CommandResult> {
        if self.pseudo_status().is_turned_on() {
            self.turn_off().await
        } else {
            self.turn_on().await
        }
    }
}
