// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light remote.

use crate::command::InfraredCommand;
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};

remote_wrapper! {
    /// Infrared light.
    LightRemote => [Light]
}

impl<P: Protocol> LightRemote<P> {
    /// Brighter.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn brightness_up(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::BrightnessUp).await
    }

    /// Dimmer.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn brightness_down(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::BrightnessDown).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::capabilities::{DeviceHandle, PseudoStatusBacked};
    use crate::device::physical::testing::body;
    use crate::device::remote::testing::build;

    #[tokio::test]
    async fn brightness_does_not_touch_power() {
        let light: LightRemote<_> = build("Light", |p| p.ok(json!({}))).await;
        light.brightness_down().await.unwrap();

        assert_eq!(body(light.core().api(), 1), json!({"command": "brightnessDown"}));
        assert_eq!(light.pseudo_status().power(), None);
    }
}
