// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color bulb and strip light.

use crate::capabilities::{Controllable, DeviceHandle, StatusReadable};
use crate::command::{LightCommand, PowerCommand};
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};
use crate::response::{ColorBulbState, Status, StripLightState};
use crate::types::{Brightness, ColorTemperature, RgbColor};

physical_wrapper! {
    /// Color bulb.
    ColorBulb => [ColorBulb]
}

impl<P: Protocol> ColorBulb<P> {
    /// Sets the brightness.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_brightness(&self, brightness: Brightness) -> Result<CommandResult> {
        self.core
            .send(&LightCommand::SetBrightness(brightness))
            .await
    }

    /// Sets the color.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_color(&self, color: RgbColor) -> Result<CommandResult> {
        self.core.send(&LightCommand::SetColor(color)).await
    }

    /// Sets the color from `#rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidColor` for a malformed string, before
    /// anything is sent.
    pub async fn set_color_hex(&self, hex: &str) -> Result<CommandResult> {
        let color = RgbColor::from_hex(hex)?;
        self.set_color(color).await
    }

    /// Sets the white color temperature.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_color_temperature(&self, kelvin: ColorTemperature) -> Result<CommandResult> {
        self.core
            .send(&LightCommand::SetColorTemperature(kelvin))
            .await
    }
}

impl<P: Protocol> StatusReadable for ColorBulb<P> {
    type Status = Status<ColorBulbState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

impl<P: Protocol> Controllable for ColorBulb<P> {
    async fn is_turned_on(&self) -> Result<bool> {
        Ok(self.status().await?.power.is_on())
    }
}

physical_wrapper! {
    /// LED strip light.
    StripLight => [StripLight]
}

impl<P: Protocol> StripLight<P> {
    /// Sets the brightness.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_brightness(&self, brightness: Brightness) -> Result<CommandResult> {
        self.core
            .send(&LightCommand::SetBrightness(brightness))
            .await
    }

    /// Sets the color.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_color(&self, color: RgbColor) -> Result<CommandResult> {
        self.core.send(&LightCommand::SetColor(color)).await
    }

    /// Sets the color from `#rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidColor` for a malformed string.
    pub async fn set_color_hex(&self, hex: &str) -> Result<CommandResult> {
        let color = RgbColor::from_hex(hex)?;
        self.set_color(color).await
    }
}

impl<P: Protocol> StatusReadable for StripLight<P> {
    type Status = Status<StripLightState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

impl<P: Protocol> Controllable for StripLight<P> {
    async fn is_turned_on(&self) -> Result<bool> {
        Ok(self.status().await?.power.is_on())
    }

    async fn toggle(&self) -> Result<CommandResult> {
        self.core().send(&PowerCommand::Toggle).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::device::physical::testing::{body, build};
    use crate::error::{Error, ValueError};

    #[tokio::test]
    async fn hex_color_becomes_decimal_triplet() {
        let bulb: ColorBulb<_> = build("Color Bulb", |p| p.ok(json!({}))).await;
        bulb.set_color_hex("#FF8000").await.unwrap();

        assert_eq!(
            body(bulb.core().api(), 1),
            json!({"command": "setColor", "parameter": "255:128:0"})
        );
    }

    #[tokio::test]
    async fn invalid_hex_sends_nothing() {
        let bulb: ColorBulb<_> = build("Color Bulb", |p| p).await;
        let result = bulb.set_color_hex("#GG0000").await;

        assert!(matches!(result, Err(Error::Value(ValueError::InvalidColor(_)))));
        assert_eq!(bulb.core().api().protocol().requests().len(), 1);
    }

    #[tokio::test]
    async fn bulb_color_temperature() {
        let bulb: ColorBulb<_> = build("Color Bulb", |p| p.ok(json!({}))).await;
        bulb.set_color_temperature(ColorTemperature::new(4000).unwrap())
            .await
            .unwrap();
        assert_eq!(
            body(bulb.core().api(), 1),
            json!({"command": "setColorTemperature", "parameter": "4000"})
        );
    }

    #[tokio::test]
    async fn bulb_toggle_reads_status() {
        let bulb: ColorBulb<_> = build("Color Bulb", |p| {
            p.ok(json!({
                "power": "on",
                "brightness": 80,
                "color": "255:255:255",
                "colorTemperature": 3000,
            }))
            .ok(json!({}))
        })
        .await;
        bulb.toggle().await.unwrap();
        assert_eq!(body(bulb.core().api(), 2), json!({"command": "turnOff"}));
    }

    #[tokio::test]
    async fn strip_light_dedicated_toggle() {
        let strip: StripLight<_> = build("Strip Light", |p| p.ok(json!({}))).await;
        strip.toggle().await.unwrap();
        assert_eq!(body(strip.core().api(), 1), json!({"command": "toggle"}));
    }

    #[tokio::test]
    async fn strip_light_status() {
        let strip: StripLight<_> = build("Strip Light", |p| {
            p.ok(json!({"power": "off", "brightness": 10, "color": "0:0:255"}))
        })
        .await;
        let status = strip.status().await.unwrap();
        assert_eq!(status.color, RgbColor::new(0, 0, 255));
        assert_eq!(status.brightness, 10);
    }
}
