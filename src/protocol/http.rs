// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTPS transport for the SwitchBot cloud API.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::protocol::{AuthHeaders, CommandResult, Credentials, Method, Protocol};

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration of the HTTPS transport.
///
/// # Examples
///
/// ```
/// use switchbot_client::protocol::{Credentials, HttpConfig};
/// use std::time::Duration;
///
/// let config = HttpConfig::new(Credentials::new("token", "secret"))
///     .with_api_host_domain("https://api.switch-bot.com")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "https://api.switch-bot.com/v1.1");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    credentials: Credentials,
    api_host_domain: String,
    api_version: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Production API host.
    pub const DEFAULT_API_HOST_DOMAIN: &'static str = "https://api.switch-bot.com";
    /// API version whose signing scheme this crate implements.
    pub const DEFAULT_API_VERSION: &'static str = "v1.1";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the production API.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_host_domain: Self::DEFAULT_API_HOST_DOMAIN.to_string(),
            api_version: Self::DEFAULT_API_VERSION.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the API host, e.g. `https://api.switch-bot.com`.
    #[must_use]
    pub fn with_api_host_domain(mut self, api_host_domain: impl Into<String>) -> Self {
        self.api_host_domain = api_host_domain.into();
        self
    }

    /// Sets the API version path segment.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API host.
    #[must_use]
    pub fn api_host_domain(&self) -> &str {
        &self.api_host_domain
    }

    /// Returns the API version.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the versioned base URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_host_domain.trim_end_matches('/'),
            self.api_version
        )
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            credentials: self.credentials,
        })
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTPS client for the SwitchBot API.
///
/// Stateless: every call signs a fresh request and performs exactly one round
/// trip.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    credentials: Credentials,
}

impl HttpClient {
    /// Creates a client for the production API.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(credentials: Credentials) -> Result<Self, ProtocolError> {
        HttpConfig::new(credentials).into_client()
    }

    /// Returns the versioned base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn build_headers(auth: &AuthHeaders) -> Result<HeaderMap, ProtocolError> {
        fn value(name: &'static str, raw: &str) -> Result<HeaderValue, ProtocolError> {
            HeaderValue::from_str(raw).map_err(|_| ProtocolError::InvalidHeader(name))
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("switchbot-client/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(AUTHORIZATION, value("Authorization", &auth.authorization)?);
        headers.insert(HeaderName::from_static("t"), value("t", &auth.t)?);
        headers.insert(HeaderName::from_static("sign"), value("sign", &auth.sign)?);
        headers.insert(HeaderName::from_static("nonce"), value("nonce", &auth.nonce)?);
        Ok(headers)
    }
}

impl Protocol for HttpClient {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<CommandResult, ProtocolError> {
        let url = self.build_url(path);
        let headers = Self::build_headers(&self.credentials.sign_now()?)?;

        tracing::debug!(method = ?method, url = %url, "Sending API request");

        let request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        }
        .headers(headers);

        let request = match body {
            Some(body) => request.body(body.to_string()),
            None => request,
        };

        let response = request.send().await.map_err(ProtocolError::Http)?;
        let http_status = response.status().as_u16();
        let text = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(http_status, body = %text, "Received API response");

        CommandResult::from_body(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("token", "secret")
    }

    #[test]
    fn config_default_values() {
        let config = HttpConfig::new(credentials());
        assert_eq!(config.api_host_domain(), "https://api.switch-bot.com");
        assert_eq!(config.api_version(), "v1.1");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.credentials().token(), "token");
    }

    #[test]
    fn config_base_url_trims_trailing_slash() {
        let config = HttpConfig::new(credentials()).with_api_host_domain("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080/v1.1");
    }

    #[test]
    fn config_custom_version() {
        let config = HttpConfig::new(credentials()).with_api_version("v1.0");
        assert_eq!(config.base_url(), "https://api.switch-bot.com/v1.0");
    }

    #[test]
    fn config_into_client() {
        let client = HttpConfig::new(credentials())
            .with_timeout(Duration::from_secs(3))
            .into_client()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.switch-bot.com/v1.1");
    }

    #[test]
    fn build_url_joins_path() {
        let client = HttpClient::new(credentials()).unwrap();
        assert_eq!(
            client.build_url("devices/ABC/status"),
            "https://api.switch-bot.com/v1.1/devices/ABC/status"
        );
        assert_eq!(
            client.build_url("/scenes"),
            "https://api.switch-bot.com/v1.1/scenes"
        );
    }

    #[test]
    fn headers_carry_signature() {
        let auth = credentials().sign(1_700_000_000_000, "").unwrap();
        let headers = HttpClient::build_headers(&auth).unwrap();

        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[AUTHORIZATION], "token");
        assert_eq!(headers["t"], "1700000000000");
        assert_eq!(headers["sign"], "Ttm0ZN0AQN2ebCj4A5Qj0Db63sBTdR36nBgM13GiHqs=");
        assert_eq!(headers["nonce"], "");
        assert!(
            headers[USER_AGENT]
                .to_str()
                .unwrap()
                .starts_with("switchbot-client/")
        );
    }

    #[test]
    fn headers_reject_control_characters() {
        let auth = Credentials::new("tok\nen", "secret").sign(0, "").unwrap();
        let err = HttpClient::build_headers(&auth).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidHeader("Authorization")));
    }
}
