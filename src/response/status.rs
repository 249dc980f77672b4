// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response parsing.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::device::{DeviceInfo, normalize_hub_device_id};
use crate::error::ParseError;

/// Common part of every status response from `GET devices/{id}/status`.
///
/// Identity fields missing from the body are filled from the device the
/// status was requested for. The untouched body is kept in `raw_data`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use switchbot_client::response::DeviceStatus;
///
/// let status = DeviceStatus::from_body(&json!({
///     "deviceId": "C271111EC0AB",
///     "deviceType": "Meter",
///     "hubDeviceId": "FFFFFFFFFFFF",
///     "temperature": 22.5,
/// }))
/// .unwrap();
///
/// assert_eq!(status.device_type, "Meter");
/// assert_eq!(status.hub_device_id, None);
/// assert_eq!(status.raw_data["temperature"], 22.5);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceStatus {
    /// Device id.
    pub device_id: String,
    /// Vendor device type string.
    pub device_type: String,
    /// Display name.
    pub device_name: String,
    /// Hub id, `None` when the device needs no hub.
    pub hub_device_id: Option<String>,
    /// Raw status body.
    pub raw_data: Map<String, Value>,
}

impl DeviceStatus {
    /// Builds a status from a body alone, leaving absent identity fields
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a JSON object.
    pub fn from_body(body: &Value) -> Result<Self, ParseError> {
        Self::from_body_with(body, None)
    }

    /// Builds a status, falling back to `device` for absent identity fields.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a JSON object.
    pub fn for_device(body: &Value, device: &DeviceInfo) -> Result<Self, ParseError> {
        Self::from_body_with(body, Some(device))
    }

    fn from_body_with(body: &Value, device: Option<&DeviceInfo>) -> Result<Self, ParseError> {
        let raw_data = body_object(body)?;

        let text = |key: &str, fallback: Option<&str>| {
            raw_data
                .get(key)
                .and_then(Value::as_str)
                .or(fallback)
                .unwrap_or_default()
                .to_string()
        };

        let hub_device_id = match raw_data.get("hubDeviceId").and_then(Value::as_str) {
            Some(hub) => normalize_hub_device_id(Some(hub)),
            None => device.and_then(|d| d.hub_device_id().map(str::to_string)),
        };

        Ok(Self {
            device_id: text("deviceId", device.map(DeviceInfo::device_id)),
            device_type: text("deviceType", device.map(DeviceInfo::device_type)),
            device_name: text("deviceName", device.map(DeviceInfo::device_name)),
            hub_device_id,
            raw_data,
        })
    }

    /// Projects the raw body onto a typed family status.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if a required field is missing or has the
    /// wrong type.
    pub fn project<T: DeserializeOwned>(self) -> Result<Status<T>, ParseError> {
        let state = serde_json::from_value(Value::Object(self.raw_data.clone()))?;
        Ok(Status { base: self, state })
    }
}

fn body_object(body: &Value) -> Result<Map<String, Value>, ParseError> {
    match body {
        Value::Object(map) => Ok(map.clone()),
        Value::Null => Ok(Map::new()),
        other => Err(ParseError::Json(serde::de::Error::custom(format!(
            "status body is not an object: {other}"
        )))),
    }
}

/// A family status: common identity plus typed fields.
///
/// Dereferences to the typed fields, so `status.power` works directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Status<T> {
    /// Identity and raw body.
    pub base: DeviceStatus,
    /// Typed fields.
    pub state: T,
}

impl<T> Status<T> {
    /// Returns the raw status body.
    #[must_use]
    pub fn raw_data(&self) -> &Map<String, Value> {
        &self.base.raw_data
    }
}

impl<T> Deref for Status<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Power {
        power: String,
    }

    #[test]
    fn identity_from_body() {
        let status = DeviceStatus::from_body(&json!({
            "deviceId": "ABC",
            "deviceType": "Bot",
            "hubDeviceId": "E00000000000",
            "power": "on"
        }))
        .unwrap();

        assert_eq!(status.device_id, "ABC");
        assert_eq!(status.device_type, "Bot");
        assert_eq!(status.device_name, "");
        assert_eq!(status.hub_device_id.as_deref(), Some("E00000000000"));
    }

    #[test]
    fn null_body_is_empty() {
        let status = DeviceStatus::from_body(&Value::Null).unwrap();
        assert!(status.raw_data.is_empty());
    }

    #[test]
    fn non_object_body_is_error() {
        assert!(DeviceStatus::from_body(&json!([1, 2])).is_err());
    }

    #[test]
    fn project_keeps_raw_data() {
        let status = DeviceStatus::from_body(&json!({"power": "on", "extra": 1}))
            .unwrap()
            .project::<Power>()
            .unwrap();

        assert_eq!(status.power, "on");
        assert_eq!(status.raw_data()["extra"], 1);
    }

    #[test]
    fn project_missing_field_is_error() {
        let result = DeviceStatus::from_body(&json!({})).unwrap().project::<Power>();
        assert!(matches!(result, Err(ParseError::Json(_))));
    }
}
