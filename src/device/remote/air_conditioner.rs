// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner remote.

use crate::capabilities::PseudoStatusBacked;
use crate::command::InfraredCommand;
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};
use crate::state::StateChange;
use crate::types::{AcFanSpeed, AcMode, PowerState, Temperature};

remote_wrapper! {
    /// Air conditioner driven through `setAll`.
    ///
    /// Single-field setters fill the other fields from the pseudo-status.
    /// Fields never set default to 25.0 °C, auto mode, auto fan and power
    /// on, so `set_temperature(20.0)` on a fresh remote sends
    /// `20.0,1,1,on`.
    AirConditioner => [AirConditioner]
}

impl<P: Protocol> AirConditioner<P> {
    /// Sets every field at once and memorizes all of them.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_all(
        &mut self,
        temperature: Temperature,
        mode: AcMode,
        fan_speed: AcFanSpeed,
        power: PowerState,
    ) -> Result<CommandResult> {
        let command = InfraredCommand::SetAll {
            temperature,
            mode,
            fan_speed,
            power,
        };
        self.send_memorized(
            &command,
            StateChange::set_all(temperature, mode, fan_speed, power),
        )
        .await
    }

    /// Sets the temperature and memorizes it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_temperature(&mut self, temperature: Temperature) -> Result<CommandResult> {
        let status = &self.pseudo_status;
        let command = InfraredCommand::SetAll {
            temperature,
            mode: status.mode_or_default(),
            fan_speed: status.fan_speed_or_default(),
            power: status.power_or_default(),
        };
        self.send_memorized(&command, StateChange::Temperature(temperature))
            .await
    }

    /// Sets the mode and memorizes it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_mode(&mut self, mode: AcMode) -> Result<CommandResult> {
        let status = &self.pseudo_status;
        let command = InfraredCommand::SetAll {
            temperature: status.temperature_or_default(),
            mode,
            fan_speed: status.fan_speed_or_default(),
            power: status.power_or_default(),
        };
        self.send_memorized(&command, StateChange::Mode(mode)).await
    }

    /// Sets the fan speed and memorizes it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_fan_speed(&mut self, fan_speed: AcFanSpeed) -> Result<CommandResult> {
        let status = &self.pseudo_status;
        let command = InfraredCommand::SetAll {
            temperature: status.temperature_or_default(),
            mode: status.mode_or_default(),
            fan_speed,
            power: status.power_or_default(),
        };
        self.send_memorized(&command, StateChange::FanSpeed(fan_speed))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::capabilities::DeviceHandle;
    use crate::device::physical::testing::body;
    use crate::device::remote::testing::build;

    fn celsius(value: f64) -> Temperature {
        Temperature::new(value).unwrap()
    }

    #[tokio::test]
    async fn fresh_remote_uses_defaults() {
        let mut ac: AirConditioner<_> = build("Air Conditioner", |p| p.ok(json!({}))).await;
        ac.set_temperature(celsius(20.0)).await.unwrap();

        assert_eq!(
            body(ac.core().api(), 1),
            json!({"command": "setAll", "parameter": "20.0,1,1,on"})
        );
        assert_eq!(ac.pseudo_status().temperature(), Some(celsius(20.0)));
        assert_eq!(ac.pseudo_status().mode(), None);
        assert_eq!(ac.pseudo_status().power(), None);
    }

    #[tokio::test]
    async fn single_setters_reuse_memorized_fields() {
        let mut ac: AirConditioner<_> = build("Air Conditioner", |p| {
            p.ok(json!({})).ok(json!({})).ok(json!({}))
        })
        .await;
        ac.set_all(celsius(26.5), AcMode::Cool, AcFanSpeed::High, PowerState::On)
            .await
            .unwrap();
        ac.set_fan_speed(AcFanSpeed::Low).await.unwrap();
        ac.set_mode(AcMode::Dry).await.unwrap();

        let api = ac.core().api();
        assert_eq!(body(api, 1)["parameter"], "26.5,2,4,on");
        assert_eq!(body(api, 2)["parameter"], "26.5,2,2,on");
        assert_eq!(body(api, 3)["parameter"], "26.5,3,2,on");
        assert_eq!(ac.pseudo_status().raw_data()["mode"], 3);
    }

    #[tokio::test]
    async fn memorized_power_off_is_reused() {
        let mut ac: AirConditioner<_> =
            build("Air Conditioner", |p| p.ok(json!({})).ok(json!({}))).await;
        ac.turn_off().await.unwrap();
        ac.set_temperature(celsius(18.0)).await.unwrap();

        assert_eq!(body(ac.core().api(), 2)["parameter"], "18.0,1,1,off");
    }

    #[tokio::test]
    async fn memorized_temperature_matches_wire_value() {
        let mut ac: AirConditioner<_> = build("Air Conditioner", |p| p.ok(json!({}))).await;
        ac.set_temperature(celsius(22.25)).await.unwrap();

        assert_eq!(body(ac.core().api(), 1)["parameter"], "22.25,1,1,on");
        assert_eq!(ac.pseudo_status().raw_data()["temperature"], 22.25);
        assert_eq!(ac.pseudo_status().temperature(), Some(celsius(22.25)));
    }

    #[tokio::test]
    async fn failed_set_all_keeps_previous_values() {
        let mut ac: AirConditioner<_> = build("Air Conditioner", |p| {
            p.ok(json!({})).respond(161, "device offline", json!({}))
        })
        .await;
        ac.set_temperature(celsius(22.0)).await.unwrap();
        ac.set_all(celsius(30.0), AcMode::Heat, AcFanSpeed::High, PowerState::Off)
            .await
            .unwrap();

        let status = ac.pseudo_status();
        assert_eq!(status.temperature(), Some(celsius(22.0)));
        assert_eq!(status.mode(), None);
        assert_eq!(status.power(), None);
    }
}
