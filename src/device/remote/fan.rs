// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan remote.

use crate::command::InfraredCommand;
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};

remote_wrapper! {
    /// Infrared fan.
    FanRemote => [Fan]
}

impl<P: Protocol> FanRemote<P> {
    /// Toggles oscillation.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn swing(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::Swing).await
    }

    /// Cycles the timer.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn timer(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::Timer).await
    }

    /// Low speed.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn low_speed(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::LowSpeed).await
    }

    /// Middle speed.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn middle_speed(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::MiddleSpeed).await
    }

    /// High speed.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn high_speed(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::HighSpeed).await
    }
}
