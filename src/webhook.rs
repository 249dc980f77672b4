// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Webhook configuration records.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;

/// A webhook as returned by `queryDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Target URL.
    pub url: String,
    /// Whether events are delivered.
    pub enable: bool,
    /// Devices reporting to this URL, `"ALL"` in practice.
    pub device_list: String,
    /// Creation time.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub create_time: DateTime<Utc>,
    /// Last modification time.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_update_time: DateTime<Utc>,
}

impl Webhook {
    /// Parses the body of a `queryDetails` call.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a list of webhooks.
    pub fn list_from_body(body: &Value) -> Result<Vec<Self>, ParseError> {
        if body.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(body.clone())?)
    }
}

#[derive(Deserialize)]
struct UrlList {
    #[serde(default)]
    urls: Vec<String>,
}

/// Parses the body of a `queryUrl` call.
pub(crate) fn urls_from_body(body: &Value) -> Result<Vec<String>, ParseError> {
    if body.is_null() {
        return Ok(Vec::new());
    }
    let list: UrlList = serde_json::from_value(body.clone())?;
    Ok(list.urls)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn details() {
        let webhooks = Webhook::list_from_body(&json!([{
            "url": "https://example.com/hook",
            "createTime": 1_700_000_000_000_i64,
            "lastUpdateTime": 1_700_000_060_000_i64,
            "deviceList": "ALL",
            "enable": true,
        }]))
        .unwrap();

        assert_eq!(webhooks.len(), 1);
        let webhook = &webhooks[0];
        assert!(webhook.enable);
        assert_eq!(webhook.device_list, "ALL");
        assert_eq!(
            webhook.create_time,
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
        );
        assert_eq!(
            (webhook.last_update_time - webhook.create_time).num_seconds(),
            60
        );
    }

    #[test]
    fn missing_time_is_an_error() {
        assert!(Webhook::list_from_body(&json!([{"url": "u", "enable": true, "deviceList": "ALL"}])).is_err());
    }

    #[test]
    fn urls() {
        assert_eq!(
            urls_from_body(&json!({"urls": ["https://a", "https://b"]})).unwrap(),
            ["https://a", "https://b"]
        );
        assert!(urls_from_body(&json!({})).unwrap().is_empty());
        assert!(urls_from_body(&Value::Null).unwrap().is_empty());
    }
}
