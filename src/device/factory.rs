// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Record to wrapper dispatch.

use crate::api::ApiClient;
use crate::error::Result;
use crate::protocol::Protocol;
use crate::registry::{DeviceType, RemoteType};

use super::{
    AirConditioner, BasicDevice, Bot, ColorBulb, ContactSensor, Curtain, Device, DeviceKind,
    DeviceList, DeviceRecord, FanRemote, FromRecord, Humidifier, InfraredRemote, LightRemote,
    Lock, MediaRemote, Meter, MotionSensor, PhysicalDevice, Plug, PlugMini, RemoteDevice,
    RobotVacuum, SmartFan, StripLight, TvRemote,
};

/// Builds typed wrappers from device records.
///
/// Dispatch is an exhaustive match over [`DeviceType`] and [`RemoteType`],
/// so adding a registry entry without a wrapper does not compile.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceFactory;

impl DeviceFactory {
    /// Builds the wrapper for `record`.
    ///
    /// `deviceType` is looked at first, then `remoteType`.
    ///
    /// # Errors
    ///
    /// - `DeviceError::UnknownDeviceType` / `UnknownRemoteType` for a type
    ///   outside the registry
    /// - `DeviceError::InvalidDeviceRecord` if the record has neither key
    /// - any construction error of the wrapper, see [`FromRecord`]
    pub async fn create<P: Protocol>(api: &ApiClient<P>, record: &DeviceRecord) -> Result<Device<P>> {
        let kind = record.kind()?;
        tracing::debug!(
            device_id = %record.device_id,
            device_type = %kind,
            "Creating device wrapper"
        );

        let api = api.clone();
        Ok(match kind {
            DeviceKind::Physical(device_type) => {
                Device::Physical(Self::physical(api, record, device_type).await?)
            }
            DeviceKind::Remote(remote_type) => {
                Device::Remote(Self::remote(api, record, remote_type).await?)
            }
        })
    }

    /// Looks `device_id` up in `GET devices`, then builds its wrapper.
    ///
    /// # Errors
    ///
    /// - `DeviceError::NotFound` if no record has this id
    /// - `Error::DuplicateId` if several records do
    /// - any error of [`create`](Self::create)
    pub async fn create_by_id<P: Protocol>(api: &ApiClient<P>, device_id: &str) -> Result<Device<P>> {
        let list = Self::device_list(api).await?;
        let record = list.find(device_id)?;
        Self::create(api, record).await
    }

    /// Looks `device_id` up, then builds it as the wrapper `W`.
    ///
    /// # Errors
    ///
    /// Same as [`create_by_id`](Self::create_by_id), plus
    /// `DeviceError::TypeMismatch` if `W` does not serve the record type.
    pub async fn create_as<W, P>(api: &ApiClient<P>, device_id: &str) -> Result<W>
    where
        W: FromRecord<P>,
        P: Protocol,
    {
        let list = Self::device_list(api).await?;
        let record = list.find(device_id)?;
        W::from_record(api.clone(), record).await
    }

    /// Fetches and parses `GET devices`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, envelope or body failure.
    pub async fn device_list<P: Protocol>(api: &ApiClient<P>) -> Result<DeviceList> {
        let result = api.devices().await?;
        Ok(DeviceList::from_body(&result.body)?)
    }

    async fn physical<P: Protocol>(
        api: ApiClient<P>,
        record: &DeviceRecord,
        device_type: DeviceType,
    ) -> Result<PhysicalDevice<P>> {
        use DeviceType as T;

        Ok(match device_type {
            T::Hub | T::HubPlus | T::HubMini | T::Hub2 | T::IndoorCam | T::Remote => {
                PhysicalDevice::Basic(BasicDevice::from_record(api, record).await?)
            }
            T::Bot => PhysicalDevice::Bot(Bot::from_record(api, record).await?),
            T::Plug => PhysicalDevice::Plug(Plug::from_record(api, record).await?),
            T::PlugMiniUs | T::PlugMiniJp => {
                PhysicalDevice::PlugMini(PlugMini::from_record(api, record).await?)
            }
            T::Curtain => PhysicalDevice::Curtain(Curtain::from_record(api, record).await?),
            T::Meter | T::MeterPlus => PhysicalDevice::Meter(Meter::from_record(api, record).await?),
            T::MotionSensor => {
                PhysicalDevice::MotionSensor(MotionSensor::from_record(api, record).await?)
            }
            T::ContactSensor => {
                PhysicalDevice::ContactSensor(ContactSensor::from_record(api, record).await?)
            }
            T::ColorBulb => PhysicalDevice::ColorBulb(ColorBulb::from_record(api, record).await?),
            T::Humidifier => {
                PhysicalDevice::Humidifier(Humidifier::from_record(api, record).await?)
            }
            T::SmartFan => PhysicalDevice::SmartFan(SmartFan::from_record(api, record).await?),
            T::StripLight => {
                PhysicalDevice::StripLight(StripLight::from_record(api, record).await?)
            }
            T::SmartLock => PhysicalDevice::Lock(Lock::from_record(api, record).await?),
            T::RobotVacuumCleanerS1 | T::RobotVacuumCleanerS1Plus => {
                PhysicalDevice::RobotVacuum(RobotVacuum::from_record(api, record).await?)
            }
        })
    }

    async fn remote<P: Protocol>(
        api: ApiClient<P>,
        record: &DeviceRecord,
        remote_type: RemoteType,
    ) -> Result<RemoteDevice<P>> {
        use RemoteType as R;

        Ok(match remote_type {
            R::AirConditioner => {
                RemoteDevice::AirConditioner(AirConditioner::from_record(api, record).await?)
            }
            R::Tv | R::IptvStreamer | R::SetTopBox => {
                RemoteDevice::Tv(TvRemote::from_record(api, record).await?)
            }
            R::Dvd | R::Speaker => RemoteDevice::Media(MediaRemote::from_record(api, record).await?),
            R::Fan => RemoteDevice::Fan(FanRemote::from_record(api, record).await?),
            R::Light => RemoteDevice::Light(LightRemote::from_record(api, record).await?),
            R::Projector
            | R::Camera
            | R::AirPurifier
            | R::WaterHeater
            | R::VacuumCleaner
            | R::Others => RemoteDevice::Infrared(InfraredRemote::from_record(api, record).await?),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;
    use crate::api::testing::MockProtocol;
    use crate::error::{DeviceError, Error};

    type Mock = MockProtocol;

    fn record(value: serde_json::Value) -> DeviceRecord {
        DeviceRecord::from_value(&value).unwrap()
    }

    #[test]
    fn every_physical_type_has_exactly_one_wrapper() {
        let families: [&[DeviceType]; 14] = [
            BasicDevice::<Mock>::DEVICE_TYPES,
            Bot::<Mock>::DEVICE_TYPES,
            Plug::<Mock>::DEVICE_TYPES,
            PlugMini::<Mock>::DEVICE_TYPES,
            Curtain::<Mock>::DEVICE_TYPES,
            Meter::<Mock>::DEVICE_TYPES,
            MotionSensor::<Mock>::DEVICE_TYPES,
            ContactSensor::<Mock>::DEVICE_TYPES,
            ColorBulb::<Mock>::DEVICE_TYPES,
            Humidifier::<Mock>::DEVICE_TYPES,
            SmartFan::<Mock>::DEVICE_TYPES,
            StripLight::<Mock>::DEVICE_TYPES,
            Lock::<Mock>::DEVICE_TYPES,
            RobotVacuum::<Mock>::DEVICE_TYPES,
        ];
        let served: Vec<DeviceType> = families.iter().flat_map(|f| f.iter().copied()).collect();
        let unique: HashSet<_> = served.iter().collect();

        assert_eq!(served.len(), DeviceType::ALL.len());
        assert_eq!(unique.len(), DeviceType::ALL.len());
    }

    #[test]
    fn every_remote_type_has_exactly_one_wrapper() {
        let families: [&[RemoteType]; 6] = [
            AirConditioner::<Mock>::REMOTE_TYPES,
            TvRemote::<Mock>::REMOTE_TYPES,
            MediaRemote::<Mock>::REMOTE_TYPES,
            FanRemote::<Mock>::REMOTE_TYPES,
            LightRemote::<Mock>::REMOTE_TYPES,
            InfraredRemote::<Mock>::REMOTE_TYPES,
        ];
        let served: Vec<RemoteType> = families.iter().flat_map(|f| f.iter().copied()).collect();
        let unique: HashSet<_> = served.iter().collect();

        assert_eq!(served.len(), RemoteType::ALL.len());
        assert_eq!(unique.len(), RemoteType::ALL.len());
    }

    #[tokio::test]
    async fn physical_dispatch_is_a_bijection() {
        for device_type in DeviceType::ALL {
            let api = ApiClient::new(
                MockProtocol::new().ok(json!({"deviceType": device_type.as_str()})),
            );
            let device = DeviceFactory::create(
                &api,
                &record(json!({"deviceId": "DEV", "deviceType": device_type.as_str()})),
            )
            .await
            .unwrap();

            assert_eq!(device.info().kind(), DeviceKind::Physical(device_type));
            assert!(!device.is_virtual_infrared());
            let Device::Physical(physical) = device else {
                panic!("{device_type} built as a remote");
            };
            assert!(physical.supported_types().contains(&device_type));
        }
    }

    #[tokio::test]
    async fn remote_dispatch_is_a_bijection() {
        for remote_type in RemoteType::ALL {
            let listed = json!({"deviceId": "01-IR", "remoteType": remote_type.as_str()});
            let api = ApiClient::new(
                MockProtocol::new().ok(json!({"infraredRemoteList": [listed.clone()]})),
            );
            let device = DeviceFactory::create(&api, &record(listed)).await.unwrap();

            assert_eq!(device.info().kind(), DeviceKind::Remote(remote_type));
            let Device::Remote(remote) = device else {
                panic!("{remote_type} built as a physical device");
            };
            assert!(remote.supported_types().contains(&remote_type));
        }
    }

    #[tokio::test]
    async fn unknown_type_is_an_error() {
        let api = ApiClient::new(MockProtocol::new());
        let result = DeviceFactory::create(
            &api,
            &record(json!({"deviceId": "X", "remoteType": "Jukebox"})),
        )
        .await;

        assert!(matches!(
            result,
            Err(Error::Device(DeviceError::UnknownRemoteType(ref t))) if t == "Jukebox"
        ));
        assert!(api.protocol().requests().is_empty());
    }

    #[tokio::test]
    async fn create_by_id_rejects_duplicates() {
        let api = ApiClient::new(MockProtocol::new().ok(json!({
            "deviceList": [
                {"deviceId": "DUP", "deviceType": "Bot"},
                {"deviceId": "DUP", "deviceType": "Plug"},
            ],
        })));
        let result = DeviceFactory::create_by_id(&api, "DUP").await;
        assert!(matches!(result, Err(Error::DuplicateId { .. })));
    }

    #[tokio::test]
    async fn create_as_checks_the_wrapper() {
        let api = ApiClient::new(MockProtocol::new().ok(json!({
            "deviceList": [{"deviceId": "M1", "deviceType": "Meter"}],
        })));
        let result = DeviceFactory::create_as::<Bot<_>, _>(&api, "M1").await;

        assert!(matches!(
            result,
            Err(Error::Device(DeviceError::TypeMismatch { ref expected, ref actual, .. }))
                if expected == "Bot" && actual == "Meter"
        ));
    }

    #[tokio::test]
    async fn create_as_builds_the_wrapper() {
        let api = ApiClient::new(
            MockProtocol::new()
                .ok(json!({"deviceList": [{"deviceId": "C1", "deviceType": "Curtain"}]}))
                .ok(json!({"deviceType": "Curtain"})),
        );
        let curtain = DeviceFactory::create_as::<Curtain<_>, _>(&api, "C1")
            .await
            .unwrap();
        assert_eq!(
            crate::capabilities::DeviceHandle::info(&curtain).device_id(),
            "C1"
        );
    }
}
