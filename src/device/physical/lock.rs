// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart lock.

use crate::capabilities::StatusReadable;
use crate::command::LockCommand;
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};
use crate::response::{LockState, Status};

physical_wrapper! {
    /// Smart lock.
    Lock => [SmartLock]
}

impl<P: Protocol> Lock<P> {
    /// Locks the door.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn lock(&self) -> Result<CommandResult> {
        self.core.send(&LockCommand::Lock).await
    }

    /// Unlocks the door.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn unlock(&self) -> Result<CommandResult> {
        self.core.send(&LockCommand::Unlock).await
    }
}

impl<P: Protocol> StatusReadable for Lock<P> {
    type Status = Status<LockState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}
