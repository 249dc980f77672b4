// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level entry point.

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::device::{Device, DeviceFactory, DeviceList, FromRecord};
use crate::error::Result;
use crate::protocol::{CommandResult, HttpClient, Protocol};
use crate::scene::{Scene, find_scene};
use crate::webhook::{Webhook, urls_from_body};

/// Client for one SwitchBot account.
///
/// # Examples
///
/// ```no_run
/// use switchbot_client::SwitchBotClient;
/// use switchbot_client::config::ClientConfig;
///
/// # async fn example() -> switchbot_client::Result<()> {
/// let client = SwitchBotClient::new(
///     ClientConfig::new()
///         .with_token("my-token")
///         .with_secret_key("my-secret"),
/// )?;
///
/// for device in client.devices().await? {
///     println!("{} ({})", device.info().device_name(), device.info().device_type());
/// }
///
/// if let Some(scene) = client.scene("T02-202101011200").await? {
///     scene.execute().await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SwitchBotClient<P: Protocol = HttpClient> {
    api: ApiClient<P>,
}

impl<P: Protocol> Clone for SwitchBotClient<P> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl SwitchBotClient<HttpClient> {
    /// Creates an HTTPS client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be resolved or the HTTP
    /// client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = config.resolve()?.into_client()?;
        Ok(Self::with_protocol(http))
    }

    /// Creates an HTTPS client configured from the environment and the
    /// default config file only.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::new())
    }
}

impl<P: Protocol> SwitchBotClient<P> {
    /// Creates a client over any transport.
    pub fn with_protocol(protocol: P) -> Self {
        Self {
            api: ApiClient::new(protocol),
        }
    }

    /// Raw endpoint access.
    #[must_use]
    pub fn api(&self) -> &ApiClient<P> {
        &self.api
    }

    // ========== Devices ==========

    /// Fetches the raw device and remote lists.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, envelope or body failure.
    pub async fn device_records(&self) -> Result<DeviceList> {
        DeviceFactory::device_list(&self.api).await
    }

    /// Builds a wrapper for every device and remote of the account.
    ///
    /// Each wrapper validates itself, so this costs one extra request per
    /// device.
    ///
    /// # Errors
    ///
    /// Fails on the first record that cannot be built.
    pub async fn devices(&self) -> Result<Vec<Device<P>>> {
        let list = self.device_records().await?;
        let mut devices = Vec::with_capacity(list.records().count());
        for record in list.records() {
            devices.push(DeviceFactory::create(&self.api, record).await?);
        }
        Ok(devices)
    }

    /// Builds the wrapper for `device_id`.
    ///
    /// # Errors
    ///
    /// - `DeviceError::NotFound` if no device has this id
    /// - `Error::DuplicateId` if several do
    /// - any construction error
    pub async fn device(&self, device_id: &str) -> Result<Device<P>> {
        DeviceFactory::create_by_id(&self.api, device_id).await
    }

    /// Builds `device_id` as the wrapper `W`.
    ///
    /// # Errors
    ///
    /// Same as [`device`](Self::device), plus `DeviceError::TypeMismatch`
    /// if `W` does not serve this device.
    pub async fn device_as<W: FromRecord<P>>(&self, device_id: &str) -> Result<W> {
        DeviceFactory::create_as(&self.api, device_id).await
    }

    // ========== Scenes ==========

    /// Lists manual scenes.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, envelope or body failure.
    pub async fn scenes(&self) -> Result<Vec<Scene<P>>> {
        let result = self.api.scenes().await?;
        Scene::list_from_body(&self.api, &result.body)
    }

    /// Finds a scene by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateId` if several scenes share the id.
    pub async fn scene(&self, scene_id: &str) -> Result<Option<Scene<P>>> {
        find_scene(self.scenes().await?, scene_id)
    }

    // ========== Webhooks ==========

    /// Registers `url` for events of every device.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn setup_webhook(&self, url: &str) -> Result<CommandResult> {
        Ok(self.api.setup_webhook(url).await?)
    }

    /// Lists registered webhook URLs.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, envelope or body failure.
    pub async fn query_webhook_urls(&self) -> Result<Vec<String>> {
        let result = self.api.query_webhook_urls().await?;
        Ok(urls_from_body(&result.body)?)
    }

    /// Fetches the configuration of the given webhooks.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, envelope or body failure.
    pub async fn query_webhook_details(&self, urls: &[String]) -> Result<Vec<Webhook>> {
        let result = self.api.query_webhook_details(urls).await?;
        Ok(Webhook::list_from_body(&result.body)?)
    }

    /// Enables or disables a webhook.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn update_webhook(&self, url: &str, enable: bool) -> Result<CommandResult> {
        Ok(self.api.update_webhook(url, enable).await?)
    }

    /// Removes a webhook.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn delete_webhook(&self, url: &str) -> Result<CommandResult> {
        Ok(self.api.delete_webhook(url).await?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::testing::MockProtocol;
    use crate::device::{AirConditioner, PhysicalDevice, RemoteDevice};
    use crate::error::{DeviceError, Error};

    #[tokio::test]
    async fn devices_builds_every_record() {
        let list = json!({
            "deviceList": [
                {"deviceId": "B1", "deviceType": "Bot", "hubDeviceId": "000000000000"},
            ],
            "infraredRemoteList": [
                {"deviceId": "01-ac", "remoteType": "Air Conditioner", "hubDeviceId": "E1"},
            ],
        });
        let client = SwitchBotClient::with_protocol(
            MockProtocol::new()
                .ok(list.clone())
                .ok(json!({"deviceType": "Bot"}))
                .ok(list),
        );

        let devices = client.devices().await.unwrap();
        assert_eq!(devices.len(), 2);
        assert!(matches!(devices[0], Device::Physical(PhysicalDevice::Bot(_))));
        assert_eq!(devices[0].info().hub_device_id(), None);
        assert!(matches!(
            devices[1],
            Device::Remote(RemoteDevice::AirConditioner(_))
        ));
        assert_eq!(devices[1].info().hub_device_id(), Some("E1"));
    }

    #[tokio::test]
    async fn device_as_typed_remote() {
        let list = json!({"infraredRemoteList": [{"deviceId": "01-ac", "remoteType": "Air Conditioner"}]});
        let client =
            SwitchBotClient::with_protocol(MockProtocol::new().ok(list.clone()).ok(list));
        let ac: AirConditioner<_> = client.device_as("01-ac").await.unwrap();
        assert!(crate::capabilities::DeviceHandle::info(&ac).is_virtual_infrared());
    }

    #[tokio::test]
    async fn unknown_device_id() {
        let client = SwitchBotClient::with_protocol(MockProtocol::new().ok(json!({})));
        assert!(matches!(
            client.device("nope").await,
            Err(Error::Device(DeviceError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn scene_by_id() {
        let scenes = json!([
            {"sceneId": "T01", "sceneName": "A"},
            {"sceneId": "T01", "sceneName": "B"},
            {"sceneId": "T02", "sceneName": "C"},
        ]);
        let client = SwitchBotClient::with_protocol(
            MockProtocol::new()
                .ok(scenes.clone())
                .ok(scenes.clone())
                .ok(scenes),
        );

        assert_eq!(client.scene("T02").await.unwrap().unwrap().scene_name(), "C");
        assert!(client.scene("T03").await.unwrap().is_none());
        assert!(matches!(
            client.scene("T01").await,
            Err(Error::DuplicateId { resource: "scene", .. })
        ));
    }

    #[tokio::test]
    async fn webhook_queries() {
        let client = SwitchBotClient::with_protocol(
            MockProtocol::new()
                .ok(json!({"urls": ["https://example.com/hook"]}))
                .ok(json!([{
                    "url": "https://example.com/hook",
                    "createTime": 1_700_000_000_000_i64,
                    "lastUpdateTime": 1_700_000_000_000_i64,
                    "deviceList": "ALL",
                    "enable": false,
                }])),
        );

        let urls = client.query_webhook_urls().await.unwrap();
        let details = client.query_webhook_details(&urls).await.unwrap();
        assert_eq!(details[0].url, urls[0]);
        assert!(!details[0].enable);
    }
}
