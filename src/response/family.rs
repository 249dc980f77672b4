// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed status fields per device family.
//!
//! Field names follow the vendor's camelCase keys. A few families changed
//! key spelling between API versions, both spellings are accepted.

use serde::{Deserialize, Deserializer};

use crate::types::{PowerState, RgbColor};

/// Bot status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BotState {
    /// Power state.
    pub power: PowerState,
}

/// Plug status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlugState {
    /// Power state.
    pub power: PowerState,
}

/// Plug Mini status, with energy readings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugMiniState {
    /// Power state.
    pub power: PowerState,
    /// Voltage in volts.
    pub voltage: f64,
    /// Power consumption of the day in watts.
    pub weight: f64,
    /// Minutes powered on today.
    pub electricity_of_day: f64,
    /// Current in amperes.
    pub electric_current: f64,
}

/// Curtain status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurtainState {
    /// Whether the curtain has been calibrated.
    #[serde(rename = "calibrate")]
    pub is_calibrated: bool,
    /// Whether the curtain is part of a group.
    #[serde(rename = "group")]
    pub is_grouped: bool,
    /// Whether the curtain is moving.
    #[serde(rename = "moving")]
    pub is_moving: bool,
    /// Position in percent, 0 open and 100 closed.
    #[serde(rename = "slidePosition", alias = "slide_position")]
    pub slide_position: u8,
}

impl CurtainState {
    /// A curtain counts as "on" unless fully open.
    #[must_use]
    pub const fn is_turned_on(&self) -> bool {
        self.slide_position != 0
    }
}

/// Meter / Meter Plus status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeterState {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Battery level in percent, when reported.
    #[serde(default)]
    pub battery: Option<u8>,
}

/// Motion sensor status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MotionSensorState {
    /// Whether motion is detected.
    #[serde(rename = "moveDetected")]
    pub is_move_detected: bool,
    /// Ambient brightness, `"bright"` or `"dim"`.
    pub brightness: String,
    /// Battery level in percent, when reported.
    #[serde(default)]
    pub battery: Option<u8>,
}

/// Contact sensor status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSensorState {
    /// Whether motion is detected.
    #[serde(rename = "moveDetected")]
    pub is_move_detected: bool,
    /// Ambient brightness, `"bright"` or `"dim"`.
    pub brightness: String,
    /// `"open"`, `"close"` or `"timeOutNotClose"`.
    pub open_state: String,
    /// Battery level in percent, when reported.
    #[serde(default)]
    pub battery: Option<u8>,
}

/// Color bulb status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorBulbState {
    /// Power state.
    pub power: PowerState,
    /// Brightness in percent.
    pub brightness: u8,
    /// Current color.
    pub color: RgbColor,
    /// Color temperature in kelvin.
    pub color_temperature: u16,
}

/// Humidifier status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumidifierState {
    /// Power state.
    pub power: PowerState,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Atomization efficiency in percent.
    #[serde(rename = "nebulizationEfficiency")]
    pub atomization_efficiency: u8,
    /// Whether auto mode is on.
    #[serde(rename = "auto")]
    pub is_auto: bool,
    /// Whether child lock is on.
    #[serde(rename = "childLock")]
    pub is_child_lock: bool,
    /// Whether sound is on.
    pub sound: bool,
    /// Whether the tank is empty. Older devices do not report it.
    #[serde(rename = "lackWater", default)]
    pub is_lack_water: bool,
}

impl HumidifierState {
    /// Returns `true` if sound is off.
    #[must_use]
    pub const fn is_muted(&self) -> bool {
        !self.sound
    }
}

/// Smart fan status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartFanState {
    /// Power state, `off` when not reported.
    #[serde(default)]
    pub power: PowerState,
    /// Fan mode, `1` standard and `2` natural.
    pub mode: i64,
    /// Fan speed, 1-4.
    pub speed: i64,
    /// Whether the fan is oscillating.
    #[serde(rename = "shaking")]
    pub is_shaking: bool,
    /// Oscillation center in degrees.
    #[serde(deserialize_with = "number_or_string")]
    pub shake_center: i64,
    /// Oscillation range in degrees.
    #[serde(deserialize_with = "number_or_string")]
    pub shake_range: i64,
}

/// Strip light status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StripLightState {
    /// Power state.
    pub power: PowerState,
    /// Brightness in percent.
    pub brightness: u8,
    /// Current color.
    pub color: RgbColor,
}

/// Smart lock status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LockState {
    /// Whether the lock has been calibrated.
    #[serde(rename = "calibrate")]
    pub is_calibrated: bool,
    /// `"locked"`, `"unlocked"` or `"jammed"`.
    #[serde(rename = "lockState", alias = "lock_state")]
    pub lock_state: String,
    /// `"opened"` or `"closed"`.
    #[serde(rename = "doorState", alias = "door_state")]
    pub door_state: String,
}

/// Robot vacuum cleaner status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RobotVacuumState {
    /// Working status, e.g. `"Clearing"` or `"ChargeDone"`.
    #[serde(rename = "workingStatus", alias = "working_status")]
    pub working_status: String,
    /// `"online"` or `"offline"`.
    #[serde(rename = "onlineStatus", alias = "online_status")]
    pub online_status: String,
    /// Battery level in percent, when reported.
    #[serde(default)]
    pub battery: Option<u8>,
}

/// Some firmware report angles as strings.
fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn curtain_accepts_both_position_keys() {
        let body = json!({"calibrate": true, "group": false, "moving": false, "slidePosition": 0});
        let state: CurtainState = serde_json::from_value(body).unwrap();
        assert!(!state.is_turned_on());

        let body = json!({"calibrate": true, "group": false, "moving": true, "slide_position": 40});
        let state: CurtainState = serde_json::from_value(body).unwrap();
        assert_eq!(state.slide_position, 40);
        assert!(state.is_turned_on());
    }

    #[test]
    fn smart_fan_defaults_power_and_parses_string_angles() {
        let body = json!({
            "mode": 1,
            "speed": 2,
            "shaking": true,
            "shakeCenter": "60",
            "shakeRange": 90
        });
        let state: SmartFanState = serde_json::from_value(body).unwrap();
        assert_eq!(state.power, PowerState::Off);
        assert_eq!(state.shake_center, 60);
        assert_eq!(state.shake_range, 90);
    }

    #[test]
    fn smart_fan_rejects_non_numeric_angle() {
        let body = json!({
            "mode": 1, "speed": 2, "shaking": true, "shakeCenter": "wide", "shakeRange": 90
        });
        assert!(serde_json::from_value::<SmartFanState>(body).is_err());
    }

    #[test]
    fn humidifier_defaults_lack_water() {
        let body = json!({
            "power": "on",
            "humidity": 45,
            "temperature": 21.5,
            "nebulizationEfficiency": 67,
            "auto": false,
            "childLock": false,
            "sound": false
        });
        let state: HumidifierState = serde_json::from_value(body).unwrap();
        assert!(!state.is_lack_water);
        assert!(state.is_muted());
        assert_eq!(state.atomization_efficiency, 67);
    }

    #[test]
    fn meter_battery_is_optional() {
        let state: MeterState =
            serde_json::from_value(json!({"temperature": 23, "humidity": 50})).unwrap();
        assert!((state.temperature - 23.0).abs() < f64::EPSILON);
        assert_eq!(state.battery, None);

        let state: MeterState =
            serde_json::from_value(json!({"temperature": 23.4, "humidity": 50, "battery": 88}))
                .unwrap();
        assert_eq!(state.battery, Some(88));
    }

    #[test]
    fn color_bulb_parses_color() {
        let body = json!({
            "power": "ON",
            "brightness": 80,
            "color": "255:0:0",
            "colorTemperature": 4000
        });
        let state: ColorBulbState = serde_json::from_value(body).unwrap();
        assert_eq!(state.color.to_hex(), "#ff0000");
        assert!(state.power.is_on());
    }

    #[test]
    fn lock_accepts_both_spellings() {
        let state: LockState = serde_json::from_value(
            json!({"calibrate": true, "lockState": "locked", "doorState": "closed"}),
        )
        .unwrap();
        assert_eq!(state.lock_state, "locked");

        let state: LockState = serde_json::from_value(
            json!({"calibrate": true, "lock_state": "unlocked", "door_state": "opened"}),
        )
        .unwrap();
        assert_eq!(state.door_state, "opened");
    }

    #[test]
    fn missing_required_field_is_error() {
        assert!(serde_json::from_value::<BotState>(json!({})).is_err());
        assert!(serde_json::from_value::<PlugMiniState>(json!({"power": "on"})).is_err());
    }
}
