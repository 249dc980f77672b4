// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Part shared by every device wrapper.

use serde_json::Value;

use crate::api::ApiClient;
use crate::command::{Command, CommandPayload, CommandType};
use crate::error::{DeviceError, Error, Result};
use crate::protocol::{CommandResult, Protocol, status_code};
use crate::registry::{DeviceType, RemoteType};
use crate::response::DeviceStatus;

use super::{DeviceKind, DeviceList, DeviceInfo, DeviceRecord};

/// Identity plus the endpoint client.
///
/// Wrappers embed a core and expose it through
/// [`DeviceHandle::core`](crate::capabilities::DeviceHandle::core). The
/// identity never changes after construction.
#[derive(Debug)]
pub struct DeviceCore<P: Protocol> {
    info: DeviceInfo,
    api: ApiClient<P>,
}

impl<P: Protocol> DeviceCore<P> {
    /// Builds a core for a physical device and validates its type.
    ///
    /// The record must be one of `accepted`, and the `deviceType` reported
    /// by the status endpoint must equal the record type. A status body
    /// without `deviceType` skips the second check.
    pub(crate) async fn physical(
        api: ApiClient<P>,
        record: &DeviceRecord,
        accepted: &[DeviceType],
    ) -> Result<Self> {
        let info = record.info()?;
        let expected = match info.kind() {
            DeviceKind::Physical(device_type) if accepted.contains(&device_type) => device_type,
            other => {
                return Err(mismatch(
                    &info,
                    &join(accepted.iter().map(DeviceType::as_str)),
                    other.as_str(),
                ));
            }
        };

        let core = Self { info, api };
        let status = core.fetch_status().await?;
        if let Some(actual) = status.raw_data.get("deviceType").and_then(Value::as_str) {
            if actual != expected.as_str() {
                return Err(mismatch(&core.info, expected.as_str(), actual));
            }
        }
        Ok(core)
    }

    /// Builds a core for an infrared remote and validates its type.
    ///
    /// The record must be one of `accepted`, and the remote list returned by
    /// `GET devices` must contain the id with the same `remoteType`.
    pub(crate) async fn remote(
        api: ApiClient<P>,
        record: &DeviceRecord,
        accepted: &[RemoteType],
    ) -> Result<Self> {
        let info = record.info()?;
        let expected = match info.kind() {
            DeviceKind::Remote(remote_type) if accepted.contains(&remote_type) => remote_type,
            other => {
                return Err(mismatch(
                    &info,
                    &join(accepted.iter().map(RemoteType::as_str)),
                    other.as_str(),
                ));
            }
        };

        let result = api.devices().await?;
        let list = DeviceList::from_body(&result.body)?;
        let listed = list.find_remote(info.device_id())?;
        let actual = listed.remote_type.as_deref().unwrap_or_default();
        if actual != expected.as_str() {
            return Err(mismatch(&info, expected.as_str(), actual));
        }
        Ok(Self { info, api })
    }

    /// Returns the device identity.
    #[must_use]
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Returns the endpoint client.
    #[must_use]
    pub fn api(&self) -> &ApiClient<P> {
        &self.api
    }

    /// Sends a raw command to this device.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure. Vendor business
    /// codes are returned in the result.
    pub async fn command(
        &self,
        name: &str,
        parameter: Option<&str>,
        command_type: CommandType,
    ) -> Result<CommandResult> {
        let payload = CommandPayload::new(name, parameter.map(str::to_string), command_type);
        self.send_payload(&payload).await
    }

    /// Sends a typed command to this device.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn send<C: Command>(&self, command: &C) -> Result<CommandResult> {
        self.send_payload(&command.to_payload()).await
    }

    async fn send_payload(&self, payload: &CommandPayload) -> Result<CommandResult> {
        let result = self
            .api
            .device_command(self.info.device_id(), payload)
            .await?;
        if !result.is_success() {
            tracing::debug!(
                device_id = %self.info.device_id(),
                command = %payload.command,
                status_code = result.status_code,
                message = %result.message,
                "Command returned a business status"
            );
        }
        Ok(result)
    }

    /// Fetches the raw status of this device.
    ///
    /// # Errors
    ///
    /// - `DeviceError::StatusUnavailable` if the API answers code 190
    /// - `ParseError::Json` if the body is not an object
    pub async fn fetch_status(&self) -> Result<DeviceStatus> {
        let result = self.api.device_status(self.info.device_id()).await?;
        if result.status_code == status_code::WRONG_DEVICE_OR_NO_STATUS {
            tracing::warn!(
                device_id = %self.info.device_id(),
                message = %result.message,
                "Status not available for device"
            );
            return Err(DeviceError::StatusUnavailable {
                device_id: self.info.device_id().to_string(),
                message: result.message,
            }
            .into());
        }
        Ok(DeviceStatus::for_device(&result.body, &self.info)?)
    }
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(" | ")
}

fn mismatch(info: &DeviceInfo, expected: &str, actual: &str) -> Error {
    tracing::warn!(
        device_id = %info.device_id(),
        expected,
        actual,
        "Illegal device type"
    );
    DeviceError::TypeMismatch {
        device_id: info.device_id().to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
    .into()
}
