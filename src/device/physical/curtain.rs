// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curtain.

use crate::capabilities::{Controllable, StatusReadable};
use crate::command::CurtainCommand;
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};
use crate::response::{CurtainState, Status};
use crate::types::{CurtainMode, SlidePosition};

physical_wrapper! {
    /// Curtain motor.
    ///
    /// `turn_on` closes and `turn_off` opens; the curtain counts as on
    /// unless it is fully open.
    Curtain => [Curtain]
}

impl<P: Protocol> Curtain<P> {
    /// Moves to `position`.
    ///
    /// `index` selects the curtain of a group, `0` for a single curtain.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use switchbot_client::device::Curtain;
    /// # use switchbot_client::protocol::HttpClient;
    /// use switchbot_client::types::{CurtainMode, SlidePosition};
    ///
    /// # async fn demo(curtain: Curtain<HttpClient>) -> switchbot_client::Result<()> {
    /// // Sends parameter "1,0,50"
    /// curtain
    ///     .set_position(1, CurtainMode::Performance, SlidePosition::new(50)?)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set_position(
        &self,
        index: u8,
        mode: CurtainMode,
        position: SlidePosition,
    ) -> Result<CommandResult> {
        self.core
            .send(&CurtainCommand::SetPosition {
                index,
                mode,
                position,
            })
            .await
    }

    /// Stops the motor.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn pause(&self) -> Result<CommandResult> {
        self.core.send(&CurtainCommand::Pause).await
    }
}

impl<P: Protocol> StatusReadable for Curtain<P> {
    type Status = Status<CurtainState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

impl<P: Protocol> Controllable for Curtain<P> {
    async fn is_turned_on(&self) -> Result<bool> {
        Ok(self.status().await?.is_turned_on())
    }
}
