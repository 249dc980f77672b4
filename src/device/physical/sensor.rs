// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only sensors.

use crate::capabilities::StatusReadable;
use crate::error::Result;
use crate::protocol::Protocol;
use crate::response::{ContactSensorState, MeterState, MotionSensorState, Status};

physical_wrapper! {
    /// Thermo-hygrometer.
    Meter => [Meter, MeterPlus]
}

impl<P: Protocol> StatusReadable for Meter<P> {
    type Status = Status<MeterState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

physical_wrapper! {
    /// Motion sensor.
    MotionSensor => [MotionSensor]
}

impl<P: Protocol> StatusReadable for MotionSensor<P> {
    type Status = Status<MotionSensorState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

physical_wrapper! {
    /// Contact sensor.
    ContactSensor => [ContactSensor]
}

impl<P: Protocol> StatusReadable for ContactSensor<P> {
    type Status = Status<ContactSensorState>;

    async fn status(&self) -> Result<Self::Status> {
        Ok(self.core.fetch_status().await?.project()?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::device::physical::testing::build;
    use crate::error::{Error, ParseError};

    #[tokio::test]
    async fn meter_plus_status() {
        let meter: Meter<_> = build("MeterPlus", |p| {
            p.ok(json!({
                "deviceId": "DEV123",
                "deviceType": "MeterPlus",
                "hubDeviceId": "E3A1B2C3D4E5",
                "temperature": 23.4,
                "humidity": 48,
                "battery": 90,
            }))
        })
        .await;

        let status = meter.status().await.unwrap();
        assert!((status.temperature - 23.4).abs() < f64::EPSILON);
        assert_eq!(status.humidity, 48);
        assert_eq!(status.battery, Some(90));
        assert_eq!(status.base.hub_device_id.as_deref(), Some("E3A1B2C3D4E5"));
    }

    #[tokio::test]
    async fn meter_without_battery() {
        let meter: Meter<_> =
            build("Meter", |p| p.ok(json!({"temperature": 20.0, "humidity": 50}))).await;
        let status = meter.status().await.unwrap();
        assert_eq!(status.battery, None);
        assert_eq!(status.base.device_id, "DEV123");
        assert_eq!(status.base.device_type, "Meter");
    }

    #[tokio::test]
    async fn missing_required_field() {
        let meter: Meter<_> = build("Meter", |p| p.ok(json!({"humidity": 50}))).await;
        assert!(matches!(
            meter.status().await,
            Err(Error::Parse(ParseError::Json(_)))
        ));
    }

    #[tokio::test]
    async fn contact_sensor_status() {
        let sensor: ContactSensor<_> = build("Contact Sensor", |p| {
            p.ok(json!({
                "moveDetected": false,
                "brightness": "dim",
                "openState": "timeOutNotClose",
            }))
        })
        .await;
        let status = sensor.status().await.unwrap();
        assert_eq!(status.open_state, "timeOutNotClose");
        assert_eq!(status.brightness, "dim");
        assert!(!status.is_move_detected);
    }

    #[tokio::test]
    async fn motion_sensor_status() {
        let sensor: MotionSensor<_> = build("Motion Sensor", |p| {
            p.ok(json!({"moveDetected": true, "brightness": "bright"}))
        })
        .await;
        assert!(sensor.status().await.unwrap().is_move_detected);
    }
}
