// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Humidifier.

use crate::capabilities::{Controllable, StatusReadable};
use crate::command::HumidifierCommand;
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};
use crate::response::{HumidifierState, Status};
use crate::types::HumidifierMode;

physical_wrapper! {
    /// Humidifier.
    Humidifier => [Humidifier]
}

impl<P: Protocol> Humidifier<P> {
    /// Sets the mode.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_mode(&self, mode: HumidifierMode) -> Result<CommandResult> {
        self.core.send(&HumidifierCommand::SetMode(mode)).await
    }

    /// Sets an explicit atomization efficiency in percent.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` above 100, before anything is sent.
    pub async fn set_atomization_efficiency(&self, percentage: u8) -> Result<CommandResult> {
        let mode = HumidifierMode::efficiency(percentage)?;
        self.set_mode(mode).await
    }

    /// Switches to auto mode.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_auto_mode(&self) -> Result<CommandResult> {
        self.set_mode(HumidifierMode::Auto).await
    }
}

impl<P: Protocol> StatusReadable for Humidifier<P> {
    type Status = Status<HumidifierState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

impl<P: Protocol> Controllable for Humidifier<P> {
    async fn is_turned_on(&self) -> Result<bool> {
        Ok(self.status().await?.power.is_on())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::capabilities::DeviceHandle;
    use crate::device::physical::testing::{body, build};
    use crate::error::{Error, ValueError};

    #[tokio::test]
    async fn mode_parameters() {
        let humidifier: Humidifier<_> = build("Humidifier", |p| {
            p.ok(json!({})).ok(json!({})).ok(json!({}))
        })
        .await;
        humidifier.set_auto_mode().await.unwrap();
        humidifier.set_mode(HumidifierMode::High).await.unwrap();
        humidifier.set_atomization_efficiency(42).await.unwrap();

        let api = humidifier.core().api();
        assert_eq!(body(api, 1), json!({"command": "setMode", "parameter": "auto"}));
        assert_eq!(body(api, 2), json!({"command": "setMode", "parameter": "103"}));
        assert_eq!(body(api, 3), json!({"command": "setMode", "parameter": "42"}));
    }

    #[tokio::test]
    async fn efficiency_out_of_range() {
        let humidifier: Humidifier<_> = build("Humidifier", |p| p).await;
        assert!(matches!(
            humidifier.set_atomization_efficiency(120).await,
            Err(Error::Value(ValueError::OutOfRange { actual: 120, .. }))
        ));
    }

    #[tokio::test]
    async fn status_without_lack_water() {
        let humidifier: Humidifier<_> = build("Humidifier", |p| {
            p.ok(json!({
                "power": "on",
                "humidity": 45,
                "temperature": 22.0,
                "nebulizationEfficiency": 67,
                "auto": false,
                "childLock": false,
                "sound": false,
            }))
        })
        .await;

        let status = humidifier.status().await.unwrap();
        assert_eq!(status.atomization_efficiency, 67);
        assert!(!status.is_lack_water);
        assert!(status.is_muted());
    }
}
