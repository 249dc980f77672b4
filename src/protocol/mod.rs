// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for the SwitchBot cloud API.
//!
//! Every call goes through a [`Protocol`] implementation which signs the
//! request, performs one round trip and normalizes the vendor envelope
//! `{"statusCode", "message", "body"}` into a [`CommandResult`].
//!
//! Normalization only fails on transport problems, on bodies that are not an
//! envelope and on the `"Unauthorized"` sentinel. Vendor business codes
//! (device offline, command not supported, ...) are returned as data.

mod auth;
mod http;

pub use auth::{AuthHeaders, Credentials};
pub use http::{HttpClient, HttpConfig};

use serde_json::Value;

use crate::error::ProtocolError;

/// Well-known `statusCode` values returned by the API.
pub mod status_code {
    /// Request accepted.
    pub const SUCCESS: i64 = 100;
    /// The device type does not support this request.
    pub const DEVICE_TYPE_ERROR: i64 = 151;
    /// The device id is not known to the account.
    pub const DEVICE_NOT_FOUND: i64 = 152;
    /// The command is not supported by the device.
    pub const COMMAND_NOT_SUPPORTED: i64 = 160;
    /// The device is offline.
    pub const DEVICE_OFFLINE: i64 = 161;
    /// The hub the device depends on is offline.
    pub const HUB_OFFLINE: i64 = 171;
    /// Wrong device id, or status requested for an infrared remote.
    pub const WRONG_DEVICE_OR_NO_STATUS: i64 = 190;
}

/// HTTP method used for an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

/// Normalized response of an API call.
///
/// A `status_code` other than [`status_code::SUCCESS`] is still a valid
/// response: the vendor uses it for conditions such as a busy or offline
/// device, which callers may want to retry.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// Vendor status code (`100` on success).
    pub status_code: i64,
    /// Vendor message (`"success"` on success).
    pub message: String,
    /// Response payload, an empty object when the API sent none.
    pub body: Value,
}

impl CommandResult {
    /// Returns `true` if the vendor reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code == status_code::SUCCESS
    }

    /// Parses a raw response body into a normalized result.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::MalformedResponse`] if the text is not JSON, or if
    ///   `message` or `statusCode` is missing
    /// - [`ProtocolError::Unauthorized`] if `message` is `"Unauthorized"`,
    ///   whatever the status code
    pub fn from_body(raw: &str) -> Result<Self, ProtocolError> {
        let malformed = || ProtocolError::MalformedResponse {
            body: raw.to_string(),
        };

        let Ok(Value::Object(mut envelope)) = serde_json::from_str::<Value>(raw) else {
            return Err(malformed());
        };

        let message = match envelope.remove("message") {
            Some(Value::String(message)) => message,
            _ => return Err(malformed()),
        };

        if message == "Unauthorized" {
            return Err(ProtocolError::Unauthorized {
                body: raw.to_string(),
            });
        }

        let status_code = envelope
            .get("statusCode")
            .and_then(Value::as_i64)
            .ok_or_else(malformed)?;

        let body = match envelope.remove("body") {
            None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
            Some(body) => body,
        };

        Ok(Self {
            status_code,
            message,
            body,
        })
    }
}

/// A transport able to send requests to the SwitchBot API.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a request to `path` (relative to the versioned base URL) and
    /// returns the normalized envelope.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request cannot be sent, if the response
    /// is not an envelope or if the API rejected the credentials.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<CommandResult, ProtocolError>;
}
