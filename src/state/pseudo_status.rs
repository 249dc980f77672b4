// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Locally memorized status of an infrared remote.

use serde_json::{Map, Value};

use crate::types::{AcFanSpeed, AcMode, PowerState, Temperature};

use super::StateChange;

/// Best-effort status of an infrared remote.
///
/// The API cannot report anything about infrared devices, so each remote
/// wrapper remembers the last value it successfully commanded. Every field
/// starts unknown. Climate fields are only ever set on air conditioners.
///
/// Typed fields are mirrored into [`raw_data`](Self::raw_data) under the
/// keys `power`, `temperature`, `mode` and `fanSpeed`, so callers can treat
/// it like the raw body of a physical device status.
///
/// # Examples
///
/// ```
/// use switchbot_client::state::PseudoStatus;
/// use switchbot_client::types::{AcMode, PowerState};
///
/// let mut status = PseudoStatus::new();
/// assert_eq!(status.power(), None);
///
/// status.set_power(PowerState::Off);
/// status.set_mode(AcMode::Heat);
///
/// assert_eq!(status.power(), Some(PowerState::Off));
/// assert_eq!(status.mode_or_default(), AcMode::Heat);
/// assert_eq!(status.raw_data()["mode"], 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PseudoStatus {
    power: Option<PowerState>,
    temperature: Option<Temperature>,
    mode: Option<AcMode>,
    fan_speed: Option<AcFanSpeed>,
    raw_data: Map<String, Value>,
}

impl PseudoStatus {
    /// Creates a status where everything is unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accessors ==========

    /// Returns the memorized power state.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.power
    }

    /// Returns the memorized temperature.
    #[must_use]
    pub fn temperature(&self) -> Option<Temperature> {
        self.temperature
    }

    /// Returns the memorized mode.
    #[must_use]
    pub fn mode(&self) -> Option<AcMode> {
        self.mode
    }

    /// Returns the memorized fan speed.
    #[must_use]
    pub fn fan_speed(&self) -> Option<AcFanSpeed> {
        self.fan_speed
    }

    /// Returns the raw mirror of the typed fields.
    #[must_use]
    pub fn raw_data(&self) -> &Map<String, Value> {
        &self.raw_data
    }

    /// Returns `true` only if the remote is known to be on.
    #[must_use]
    pub fn is_turned_on(&self) -> bool {
        self.power.is_some_and(|power| power.is_on())
    }

    // ========== Defaults for read-modify-write ==========

    /// Memorized power, or `on`.
    #[must_use]
    pub fn power_or_default(&self) -> PowerState {
        self.power.unwrap_or(PowerState::On)
    }

    /// Memorized temperature, or 25.0.
    #[must_use]
    pub fn temperature_or_default(&self) -> Temperature {
        self.temperature.unwrap_or_default()
    }

    /// Memorized mode, or auto.
    #[must_use]
    pub fn mode_or_default(&self) -> AcMode {
        self.mode.unwrap_or_default()
    }

    /// Memorized fan speed, or auto.
    #[must_use]
    pub fn fan_speed_or_default(&self) -> AcFanSpeed {
        self.fan_speed.unwrap_or_default()
    }

    // ========== Setters ==========

    /// Memorizes the power state.
    pub fn set_power(&mut self, power: PowerState) {
        self.power = Some(power);
        self.raw_data
            .insert("power".to_string(), Value::from(power.as_str()));
    }

    /// Memorizes the temperature.
    pub fn set_temperature(&mut self, temperature: Temperature) {
        self.temperature = Some(temperature);
        self.raw_data
            .insert("temperature".to_string(), Value::from(temperature.celsius()));
    }

    /// Memorizes the mode.
    pub fn set_mode(&mut self, mode: AcMode) {
        self.mode = Some(mode);
        self.raw_data
            .insert("mode".to_string(), Value::from(mode.value()));
    }

    /// Memorizes the fan speed.
    pub fn set_fan_speed(&mut self, fan_speed: AcFanSpeed) {
        self.fan_speed = Some(fan_speed);
        self.raw_data
            .insert("fanSpeed".to_string(), Value::from(fan_speed.value()));
    }

    /// Applies a change.
    pub fn apply(&mut self, change: &StateChange) {
        match change {
            StateChange::Power(power) => self.set_power(*power),
            StateChange::Temperature(temperature) => self.set_temperature(*temperature),
            StateChange::Mode(mode) => self.set_mode(*mode),
            StateChange::FanSpeed(fan_speed) => self.set_fan_speed(*fan_speed),
            StateChange::Batch(changes) => {
                for change in changes {
                    self.apply(change);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unknown() {
        let status = PseudoStatus::new();
        assert_eq!(status.power(), None);
        assert_eq!(status.temperature(), None);
        assert!(!status.is_turned_on());
        assert!(status.raw_data().is_empty());
    }

    #[test]
    fn defaults_for_unknown_fields() {
        let status = PseudoStatus::new();
        assert_eq!(status.temperature_or_default().to_string(), "25.0");
        assert_eq!(status.mode_or_default(), AcMode::Auto);
        assert_eq!(status.fan_speed_or_default(), AcFanSpeed::Auto);
        assert_eq!(status.power_or_default(), PowerState::On);
    }

    #[test]
    fn set_temperature_twice_is_idempotent() {
        let mut status = PseudoStatus::new();
        let temperature = Temperature::new(25.0).unwrap();
        status.set_temperature(temperature);
        status.set_temperature(temperature);

        assert_eq!(status.temperature(), Some(temperature));
        assert_eq!(status.raw_data()["temperature"], 25.0);
        assert_eq!(status.mode(), None);
        assert_eq!(status.fan_speed(), None);
        assert_eq!(status.raw_data().len(), 1);
    }

    #[test]
    fn batch_applies_every_field() {
        let mut status = PseudoStatus::new();
        status.apply(&StateChange::set_all(
            Temperature::new(19.5).unwrap(),
            AcMode::Cool,
            AcFanSpeed::High,
            PowerState::On,
        ));

        assert!(status.is_turned_on());
        assert_eq!(status.mode(), Some(AcMode::Cool));
        assert_eq!(status.raw_data()["fanSpeed"], 4);
        assert_eq!(status.raw_data()["power"], "on");
        assert_eq!(status.raw_data()["temperature"], 19.5);
    }
}
