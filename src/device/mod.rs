// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identity, wrappers and the factory that builds them.
//!
//! A raw record from `GET devices` is turned into a typed wrapper by
//! [`DeviceFactory`]. Each wrapper embeds a [`DeviceCore`] (identity plus the
//! endpoint client) and implements the capability traits that apply to its
//! family.
//!
//! # Physical devices
//!
//! Physical devices report their own status. Their wrappers implement
//! [`StatusReadable`](crate::capabilities::StatusReadable) and, when they can
//! be switched, [`Controllable`](crate::capabilities::Controllable).
//!
//! ```no_run
//! use switchbot_client::SwitchBotClient;
//! use switchbot_client::capabilities::{Controllable, StatusReadable};
//! use switchbot_client::device::{Device, PhysicalDevice};
//!
//! # async fn example() -> switchbot_client::Result<()> {
//! let client = SwitchBotClient::from_env()?;
//!
//! if let Device::Physical(PhysicalDevice::Curtain(curtain)) = client.device("C0FFEE123456").await? {
//!     println!("open: {}", curtain.is_turned_on().await?);
//!     curtain.turn_off().await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Infrared remotes
//!
//! Remotes cannot report status. Their wrappers implement
//! [`PseudoStatusBacked`](crate::capabilities::PseudoStatusBacked) and
//! remember what they last commanded successfully.
//!
//! ```no_run
//! use switchbot_client::SwitchBotClient;
//! use switchbot_client::device::AirConditioner;
//! use switchbot_client::types::Temperature;
//!
//! # async fn example() -> switchbot_client::Result<()> {
//! let client = SwitchBotClient::from_env()?;
//! let mut ac: AirConditioner<_> = client.device_as("01-202101011200-12345678").await?;
//!
//! ac.set_temperature(Temperature::new(22.0)?).await?;
//! # Ok(())
//! # }
//! ```

mod core;
mod factory;
mod physical;
mod remote;

pub use self::core::DeviceCore;
pub use factory::DeviceFactory;
pub use physical::{
    BasicDevice, Bot, ColorBulb, ContactSensor, Curtain, Humidifier, Lock, Meter, MotionSensor,
    Plug, PlugMini, RobotVacuum, SmartFan, StripLight,
};
pub use remote::{AirConditioner, FanRemote, InfraredRemote, LightRemote, MediaRemote, TvRemote};

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::ApiClient;
use crate::capabilities::DeviceHandle;
use crate::error::{DeviceError, Error, ParseError, Result};
use crate::protocol::{CommandResult, Protocol};
use crate::registry::{DeviceType, RemoteType};
use crate::command::CommandType;

/// Hub ids the API uses to say "no hub".
const NO_HUB_SENTINELS: [&str; 2] = ["FFFFFFFFFFFF", "000000000000"];

/// Normalizes a `hubDeviceId` value.
///
/// The sentinels `FFFFFFFFFFFF` and `000000000000`, as well as an empty
/// string, mean the device needs no hub.
///
/// # Examples
///
/// ```
/// use switchbot_client::device::normalize_hub_device_id;
///
/// assert_eq!(normalize_hub_device_id(Some("FFFFFFFFFFFF")), None);
/// assert_eq!(normalize_hub_device_id(Some("000000000000")), None);
/// assert_eq!(
///     normalize_hub_device_id(Some("E3A1B2C3D4E5")),
///     Some("E3A1B2C3D4E5".to_string())
/// );
/// ```
#[must_use]
pub fn normalize_hub_device_id(hub_device_id: Option<&str>) -> Option<String> {
    hub_device_id
        .filter(|hub| !hub.is_empty() && !NO_HUB_SENTINELS.contains(hub))
        .map(str::to_string)
}

// ============================================================================
// Identity
// ============================================================================

/// Type of a device: physical, or emulated by an infrared hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// A device with a status endpoint.
    Physical(DeviceType),
    /// An infrared remote registered on a hub.
    Remote(RemoteType),
}

impl DeviceKind {
    /// Returns the vendor type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Physical(device_type) => device_type.as_str(),
            Self::Remote(remote_type) => remote_type.as_str(),
        }
    }

    /// Returns `true` for infrared remotes.
    #[must_use]
    pub const fn is_virtual_infrared(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable identity of a wrapped device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    device_id: String,
    device_name: String,
    kind: DeviceKind,
    hub_device_id: Option<String>,
}

impl DeviceInfo {
    /// Creates an identity. The hub id is normalized.
    #[must_use]
    pub fn new(
        device_id: impl Into<String>,
        device_name: impl Into<String>,
        kind: DeviceKind,
        hub_device_id: Option<&str>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            device_name: device_name.into(),
            kind,
            hub_device_id: normalize_hub_device_id(hub_device_id),
        }
    }

    /// Device id.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Display name.
    #[must_use]
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Vendor device or remote type string.
    #[must_use]
    pub fn device_type(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Typed kind.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Hub id, `None` when the device needs no hub.
    #[must_use]
    pub fn hub_device_id(&self) -> Option<&str> {
        self.hub_device_id.as_deref()
    }

    /// Returns `true` for infrared remotes.
    #[must_use]
    pub fn is_virtual_infrared(&self) -> bool {
        self.kind.is_virtual_infrared()
    }
}

// ============================================================================
// Records
// ============================================================================

/// A raw entry of `deviceList` or `infraredRemoteList`.
///
/// Physical devices carry `deviceType`, remotes carry `remoteType`. Fields
/// this crate does not model are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    /// Device id.
    pub device_id: String,
    /// Display name.
    #[serde(default)]
    pub device_name: String,
    /// Physical device type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    /// Infrared remote type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_type: Option<String>,
    /// Raw hub id, sentinels included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_device_id: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeviceRecord {
    /// Parses a record from JSON.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::InvalidDeviceRecord` if the value is not an
    /// object with a string `deviceId`.
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| DeviceError::InvalidDeviceRecord(format!("{e}: {value}")).into())
    }

    /// Classifies the record.
    ///
    /// `deviceType` wins over `remoteType` when both are present.
    ///
    /// # Errors
    ///
    /// - `DeviceError::UnknownDeviceType` / `UnknownRemoteType` for a type
    ///   string outside the registry
    /// - `DeviceError::InvalidDeviceRecord` if neither key is present
    pub fn kind(&self) -> Result<DeviceKind> {
        if let Some(device_type) = &self.device_type {
            return Ok(DeviceKind::Physical(device_type.parse()?));
        }
        if let Some(remote_type) = &self.remote_type {
            return Ok(DeviceKind::Remote(remote_type.parse()?));
        }
        Err(DeviceError::InvalidDeviceRecord(format!(
            "{} has neither deviceType nor remoteType",
            self.device_id
        ))
        .into())
    }

    /// Builds the identity described by this record.
    ///
    /// # Errors
    ///
    /// Same as [`kind`](Self::kind).
    pub fn info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new(
            self.device_id.clone(),
            self.device_name.clone(),
            self.kind()?,
            self.hub_device_id.as_deref(),
        ))
    }
}

/// Body of `GET devices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceList {
    /// Physical devices.
    #[serde(default)]
    pub device_list: Vec<DeviceRecord>,
    /// Infrared remotes.
    #[serde(default)]
    pub infrared_remote_list: Vec<DeviceRecord>,
}

impl DeviceList {
    /// Parses the body of `GET devices`. A null body is an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if a list or record has the wrong shape.
    pub fn from_body(body: &Value) -> std::result::Result<Self, ParseError> {
        if body.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(body.clone())?)
    }

    /// Iterates over physical devices then remotes.
    pub fn records(&self) -> impl Iterator<Item = &DeviceRecord> {
        self.device_list.iter().chain(&self.infrared_remote_list)
    }

    /// Finds the single record with `device_id` in either list.
    ///
    /// # Errors
    ///
    /// - `DeviceError::NotFound` if no record matches
    /// - `Error::DuplicateId` if more than one does
    pub fn find(&self, device_id: &str) -> Result<&DeviceRecord> {
        find_unique(self.records(), device_id)
    }

    /// Finds the single remote with `device_id`.
    ///
    /// # Errors
    ///
    /// Same as [`find`](Self::find), restricted to `infraredRemoteList`.
    pub fn find_remote(&self, device_id: &str) -> Result<&DeviceRecord> {
        find_unique(self.infrared_remote_list.iter(), device_id)
    }
}

fn find_unique<'a>(
    records: impl Iterator<Item = &'a DeviceRecord>,
    device_id: &str,
) -> Result<&'a DeviceRecord> {
    let mut matches = records.filter(|record| record.device_id == device_id);
    let first = matches
        .next()
        .ok_or_else(|| DeviceError::NotFound(device_id.to_string()))?;
    if matches.next().is_some() {
        return Err(Error::DuplicateId {
            resource: "device",
            id: device_id.to_string(),
        });
    }
    Ok(first)
}

// ============================================================================
// Construction
// ============================================================================

/// Wrappers that can be built from a record.
///
/// Construction validates the record type against the wrapper and against
/// what the API reports for the device.
#[allow(async_fn_in_trait)]
pub trait FromRecord<P: Protocol>: Sized {
    /// Builds and validates the wrapper.
    ///
    /// # Errors
    ///
    /// - `DeviceError::TypeMismatch` if the wrapper does not serve the
    ///   record type, or the API reports another type
    /// - `DeviceError::NotFound` for a remote missing from the remote list
    /// - `DeviceError::StatusUnavailable` if the status fetch answers 190
    async fn from_record(api: ApiClient<P>, record: &DeviceRecord) -> Result<Self>;
}

// ============================================================================
// Dispatch enums
// ============================================================================

/// Any wrapped device.
#[derive(Debug)]
pub enum Device<P: Protocol> {
    /// Physical device.
    Physical(PhysicalDevice<P>),
    /// Infrared remote.
    Remote(RemoteDevice<P>),
}

/// A physical device, by family.
#[derive(Debug)]
pub enum PhysicalDevice<P: Protocol> {
    /// Hubs, cameras and the button remote.
    Basic(BasicDevice<P>),
    /// Bot.
    Bot(Bot<P>),
    /// Plug.
    Plug(Plug<P>),
    /// Plug Mini (US/JP).
    PlugMini(PlugMini<P>),
    /// Curtain.
    Curtain(Curtain<P>),
    /// Meter and Meter Plus.
    Meter(Meter<P>),
    /// Motion sensor.
    MotionSensor(MotionSensor<P>),
    /// Contact sensor.
    ContactSensor(ContactSensor<P>),
    /// Color bulb.
    ColorBulb(ColorBulb<P>),
    /// Humidifier.
    Humidifier(Humidifier<P>),
    /// Smart fan.
    SmartFan(SmartFan<P>),
    /// Strip light.
    StripLight(StripLight<P>),
    /// Smart lock.
    Lock(Lock<P>),
    /// Robot vacuum cleaners.
    RobotVacuum(RobotVacuum<P>),
}

/// An infrared remote, by family.
#[derive(Debug)]
pub enum RemoteDevice<P: Protocol> {
    /// Air conditioner.
    AirConditioner(AirConditioner<P>),
    /// TV, streamer, set top box.
    Tv(TvRemote<P>),
    /// DVD, speaker.
    Media(MediaRemote<P>),
    /// Fan.
    Fan(FanRemote<P>),
    /// Light.
    Light(LightRemote<P>),
    /// Every other remote type.
    Infrared(InfraredRemote<P>),
}

impl<P: Protocol> PhysicalDevice<P> {
    /// Returns the shared core.
    #[must_use]
    pub fn core(&self) -> &DeviceCore<P> {
        match self {
            Self::Basic(d) => d.core(),
            Self::Bot(d) => d.core(),
            Self::Plug(d) => d.core(),
            Self::PlugMini(d) => d.core(),
            Self::Curtain(d) => d.core(),
            Self::Meter(d) => d.core(),
            Self::MotionSensor(d) => d.core(),
            Self::ContactSensor(d) => d.core(),
            Self::ColorBulb(d) => d.core(),
            Self::Humidifier(d) => d.core(),
            Self::SmartFan(d) => d.core(),
            Self::StripLight(d) => d.core(),
            Self::Lock(d) => d.core(),
            Self::RobotVacuum(d) => d.core(),
        }
    }

    /// Device types served by the wrapped family.
    #[must_use]
    pub fn supported_types(&self) -> &'static [DeviceType] {
        match self {
            Self::Basic(_) => BasicDevice::<P>::DEVICE_TYPES,
            Self::Bot(_) => Bot::<P>::DEVICE_TYPES,
            Self::Plug(_) => Plug::<P>::DEVICE_TYPES,
            Self::PlugMini(_) => PlugMini::<P>::DEVICE_TYPES,
            Self::Curtain(_) => Curtain::<P>::DEVICE_TYPES,
            Self::Meter(_) => Meter::<P>::DEVICE_TYPES,
            Self::MotionSensor(_) => MotionSensor::<P>::DEVICE_TYPES,
            Self::ContactSensor(_) => ContactSensor::<P>::DEVICE_TYPES,
            Self::ColorBulb(_) => ColorBulb::<P>::DEVICE_TYPES,
            Self::Humidifier(_) => Humidifier::<P>::DEVICE_TYPES,
            Self::SmartFan(_) => SmartFan::<P>::DEVICE_TYPES,
            Self::StripLight(_) => StripLight::<P>::DEVICE_TYPES,
            Self::Lock(_) => Lock::<P>::DEVICE_TYPES,
            Self::RobotVacuum(_) => RobotVacuum::<P>::DEVICE_TYPES,
        }
    }
}

impl<P: Protocol> RemoteDevice<P> {
    /// Returns the shared core.
    #[must_use]
    pub fn core(&self) -> &DeviceCore<P> {
        match self {
            Self::AirConditioner(d) => d.core(),
            Self::Tv(d) => d.core(),
            Self::Media(d) => d.core(),
            Self::Fan(d) => d.core(),
            Self::Light(d) => d.core(),
            Self::Infrared(d) => d.core(),
        }
    }

    /// Remote types served by the wrapped family.
    #[must_use]
    pub fn supported_types(&self) -> &'static [RemoteType] {
        match self {
            Self::AirConditioner(_) => AirConditioner::<P>::REMOTE_TYPES,
            Self::Tv(_) => TvRemote::<P>::REMOTE_TYPES,
            Self::Media(_) => MediaRemote::<P>::REMOTE_TYPES,
            Self::Fan(_) => FanRemote::<P>::REMOTE_TYPES,
            Self::Light(_) => LightRemote::<P>::REMOTE_TYPES,
            Self::Infrared(_) => InfraredRemote::<P>::REMOTE_TYPES,
        }
    }
}

impl<P: Protocol> Device<P> {
    /// Returns the shared core.
    #[must_use]
    pub fn core(&self) -> &DeviceCore<P> {
        match self {
            Self::Physical(device) => device.core(),
            Self::Remote(remote) => remote.core(),
        }
    }

    /// Returns the device identity.
    #[must_use]
    pub fn info(&self) -> &DeviceInfo {
        self.core().info()
    }

    /// Returns `true` for infrared remotes.
    #[must_use]
    pub fn is_virtual_infrared(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Sends a raw command, whatever the family.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn command(
        &self,
        name: &str,
        parameter: Option<&str>,
        command_type: CommandType,
    ) -> Result<CommandResult> {
        self.core().command(name, parameter, command_type).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn hub_sentinels_normalize_to_none() {
        assert_eq!(normalize_hub_device_id(Some("FFFFFFFFFFFF")), None);
        assert_eq!(normalize_hub_device_id(Some("000000000000")), None);
        assert_eq!(normalize_hub_device_id(Some("")), None);
        assert_eq!(normalize_hub_device_id(None), None);
        assert_eq!(
            normalize_hub_device_id(Some("A1B2C3D4E5F6")).as_deref(),
            Some("A1B2C3D4E5F6")
        );
    }

    #[test]
    fn record_kind_prefers_device_type() {
        let record = DeviceRecord::from_value(&json!({
            "deviceId": "ABC",
            "deviceType": "Bot",
            "remoteType": "TV",
        }))
        .unwrap();
        assert_eq!(record.kind().unwrap(), DeviceKind::Physical(DeviceType::Bot));
    }

    #[test]
    fn record_kind_remote() {
        let record = DeviceRecord::from_value(&json!({
            "deviceId": "01-abc",
            "deviceName": "Living room TV",
            "remoteType": "IPTV/Streamer",
            "hubDeviceId": "E3A1B2C3D4E5",
        }))
        .unwrap();
        let info = record.info().unwrap();
        assert_eq!(info.kind(), DeviceKind::Remote(RemoteType::IptvStreamer));
        assert!(info.is_virtual_infrared());
        assert_eq!(info.device_type(), "IPTV/Streamer");
        assert_eq!(info.hub_device_id(), Some("E3A1B2C3D4E5"));
    }

    #[test]
    fn record_without_type_is_invalid() {
        let record = DeviceRecord::from_value(&json!({"deviceId": "ABC"})).unwrap();
        assert!(matches!(
            record.kind(),
            Err(Error::Device(DeviceError::InvalidDeviceRecord(_)))
        ));
    }

    #[test]
    fn record_with_unknown_type() {
        let record =
            DeviceRecord::from_value(&json!({"deviceId": "ABC", "deviceType": "Toaster"})).unwrap();
        assert!(matches!(
            record.kind(),
            Err(Error::Device(DeviceError::UnknownDeviceType(t))) if t == "Toaster"
        ));
    }

    #[test]
    fn record_without_id_is_invalid() {
        assert!(matches!(
            DeviceRecord::from_value(&json!({"deviceType": "Bot"})),
            Err(Error::Device(DeviceError::InvalidDeviceRecord(_)))
        ));
    }

    #[test]
    fn record_keeps_extra_fields() {
        let record = DeviceRecord::from_value(&json!({
            "deviceId": "ABC",
            "deviceType": "Curtain",
            "enableCloudService": true,
            "curtainDevicesIds": ["ABC", "DEF"],
        }))
        .unwrap();
        assert_eq!(record.extra["enableCloudService"], true);
        assert_eq!(record.hub_device_id, None);
    }

    #[test]
    fn list_lookup() {
        let list = DeviceList::from_body(&json!({
            "deviceList": [
                {"deviceId": "A", "deviceType": "Bot"},
                {"deviceId": "B", "deviceType": "Meter"},
                {"deviceId": "B", "deviceType": "Meter"},
            ],
            "infraredRemoteList": [
                {"deviceId": "01-x", "remoteType": "TV"},
            ],
        }))
        .unwrap();

        assert_eq!(list.records().count(), 4);
        assert_eq!(list.find("A").unwrap().device_type.as_deref(), Some("Bot"));
        assert_eq!(list.find("01-x").unwrap().remote_type.as_deref(), Some("TV"));
        assert!(matches!(
            list.find("B"),
            Err(Error::DuplicateId { resource: "device", ref id }) if id == "B"
        ));
        assert!(matches!(
            list.find("Z"),
            Err(Error::Device(DeviceError::NotFound(_)))
        ));
        assert!(matches!(
            list.find_remote("A"),
            Err(Error::Device(DeviceError::NotFound(_)))
        ));
    }

    #[test]
    fn empty_list_body() {
        let list = DeviceList::from_body(&Value::Null).unwrap();
        assert_eq!(list.records().count(), 0);
        let list = DeviceList::from_body(&json!({})).unwrap();
        assert!(list.device_list.is_empty());
    }
}
