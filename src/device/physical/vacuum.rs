// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Robot vacuum cleaners.

use crate::capabilities::StatusReadable;
use crate::command::RobotVacuumCommand;
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};
use crate::response::{RobotVacuumState, Status};
use crate::types::PowLevel;

physical_wrapper! {
    /// Robot Vacuum Cleaner S1 and S1 Plus.
    RobotVacuum => [RobotVacuumCleanerS1, RobotVacuumCleanerS1Plus]
}

impl<P: Protocol> RobotVacuum<P> {
    /// Starts cleaning.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn start(&self) -> Result<CommandResult> {
        self.core.send(&RobotVacuumCommand::Start).await
    }

    /// Stops cleaning.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn stop(&self) -> Result<CommandResult> {
        self.core.send(&RobotVacuumCommand::Stop).await
    }

    /// Returns to the dock.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn dock(&self) -> Result<CommandResult> {
        self.core.send(&RobotVacuumCommand::Dock).await
    }

    /// Sets the suction level, 0-3.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn pow_level(&self, level: PowLevel) -> Result<CommandResult> {
        self.core.send(&RobotVacuumCommand::PowLevel(level)).await
    }
}

impl<P: Protocol> StatusReadable for RobotVacuum<P> {
    type Status = Status<RobotVacuumState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}
