// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bot and plugs.

use crate::capabilities::{Controllable, DeviceHandle, StatusReadable};
use crate::command::{BotCommand, PowerCommand};
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};
use crate::response::{BotState, PlugMiniState, PlugState, Status};

physical_wrapper! {
    /// Bot, the button pusher.
    Bot => [Bot]
}

impl<P: Protocol> Bot<P> {
    /// Sends `press`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn press(&self) -> Result<CommandResult> {
        self.core.send(&BotCommand::Press).await
    }
}

impl<P: Protocol> StatusReadable for Bot<P> {
    type Status = Status<BotState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

impl<P: Protocol> Controllable for Bot<P> {
    async fn is_turned_on(&self) -> Result<bool> {
        Ok(self.status().await?.power.is_on())
    }
}

physical_wrapper! {
    /// Plug.
    Plug => [Plug]
}

impl<P: Protocol> StatusReadable for Plug<P> {
    type Status = Status<PlugState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

impl<P: Protocol> Controllable for Plug<P> {
    async fn is_turned_on(&self) -> Result<bool> {
        Ok(self.status().await?.power.is_on())
    }
}

physical_wrapper! {
    /// Plug Mini with power metering.
    PlugMini => [PlugMiniUs, PlugMiniJp]
}

impl<P: Protocol> StatusReadable for PlugMini<P> {
    type Status = Status<PlugMiniState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

impl<P: Protocol> Controllable for PlugMini<P> {
    async fn is_turned_on(&self) -> Result<bool> {
        Ok(self.status().await?.power.is_on())
    }

    /// Sends the dedicated `toggle` command.
    async fn toggle(&self) -> Result<CommandResult> {
        self.core().send(&PowerCommand::Toggle).await
    }
}
