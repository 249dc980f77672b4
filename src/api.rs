// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw endpoint access.
//!
//! [`ApiClient`] has one method per vendor endpoint and returns the
//! normalized [`CommandResult`] untouched. Interpretation of the body is left
//! to the device, scene and webhook layers.

use std::sync::Arc;

use serde_json::{Value, json};

use crate::command::CommandPayload;
use crate::error::ProtocolError;
use crate::protocol::{CommandResult, Method, Protocol};

/// Endpoint-level client shared by every wrapper.
///
/// Cloning is cheap: the transport is reference counted.
#[derive(Debug)]
pub struct ApiClient<P: Protocol> {
    protocol: Arc<P>,
}

impl<P: Protocol> Clone for ApiClient<P> {
    fn clone(&self) -> Self {
        Self {
            protocol: Arc::clone(&self.protocol),
        }
    }
}

impl<P: Protocol> ApiClient<P> {
    /// Wraps a transport.
    pub fn new(protocol: P) -> Self {
        Self {
            protocol: Arc::new(protocol),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// `GET devices`
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport or envelope failure.
    pub async fn devices(&self) -> Result<CommandResult, ProtocolError> {
        self.protocol.send(Method::Get, "devices", None).await
    }

    /// `GET devices/{id}/status`
    ///
    /// Code 190 is returned as data; see the device layer for its typed
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport or envelope failure.
    pub async fn device_status(&self, device_id: &str) -> Result<CommandResult, ProtocolError> {
        let path = format!("devices/{}/status", urlencoding::encode(device_id));
        self.protocol.send(Method::Get, &path, None).await
    }

    /// `POST devices/{id}/commands`
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport or envelope failure.
    pub async fn device_command(
        &self,
        device_id: &str,
        payload: &CommandPayload,
    ) -> Result<CommandResult, ProtocolError> {
        let path = format!("devices/{}/commands", urlencoding::encode(device_id));
        let body = json!(payload);
        tracing::debug!(
            device_id,
            command = %payload.command,
            parameter = payload.parameter.as_deref().unwrap_or_default(),
            "Sending device command"
        );
        self.protocol.send(Method::Post, &path, Some(&body)).await
    }

    /// `GET scenes`
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport or envelope failure.
    pub async fn scenes(&self) -> Result<CommandResult, ProtocolError> {
        self.protocol.send(Method::Get, "scenes", None).await
    }

    /// `POST scenes/{id}/execute`
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport or envelope failure.
    pub async fn execute_scene(&self, scene_id: &str) -> Result<CommandResult, ProtocolError> {
        let path = format!("scenes/{}/execute", urlencoding::encode(scene_id));
        self.protocol.send(Method::Post, &path, None).await
    }

    /// `POST webhook/setupWebhook` for every device.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport or envelope failure.
    pub async fn setup_webhook(&self, url: &str) -> Result<CommandResult, ProtocolError> {
        let body = json!({"action": "setupWebhook", "url": url, "deviceList": "ALL"});
        self.webhook("setupWebhook", &body).await
    }

    /// `POST webhook/queryWebhook` with `queryUrl`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport or envelope failure.
    pub async fn query_webhook_urls(&self) -> Result<CommandResult, ProtocolError> {
        let body = json!({"action": "queryUrl"});
        self.webhook("queryWebhook", &body).await
    }

    /// `POST webhook/queryWebhook` with `queryDetails`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport or envelope failure.
    pub async fn query_webhook_details(
        &self,
        urls: &[String],
    ) -> Result<CommandResult, ProtocolError> {
        let body = json!({"action": "queryDetails", "urls": urls});
        self.webhook("queryWebhook", &body).await
    }

    /// `POST webhook/updateWebhook`
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport or envelope failure.
    pub async fn update_webhook(&self, url: &str, enable: bool) -> Result<CommandResult, ProtocolError> {
        let body = json!({"action": "updateWebhook", "config": {"url": url, "enable": enable}});
        self.webhook("updateWebhook", &body).await
    }

    /// `POST webhook/deleteWebhook`
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport or envelope failure.
    pub async fn delete_webhook(&self, url: &str) -> Result<CommandResult, ProtocolError> {
        let body = json!({"action": "deleteWebhook", "url": url});
        self.webhook("deleteWebhook", &body).await
    }

    async fn webhook(&self, endpoint: &str, body: &Value) -> Result<CommandResult, ProtocolError> {
        let path = format!("webhook/{endpoint}");
        self.protocol.send(Method::Post, &path, Some(body)).await
    }
}
