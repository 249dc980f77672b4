// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client configuration.
//!
//! Each setting is resolved with the precedence explicit value, then
//! environment variable, then YAML config file:
//!
//! | Setting | Builder | Environment | Config file key |
//! |---------|---------|-------------|-----------------|
//! | token | `with_token` | `SWITCHBOT_OPEN_TOKEN` | `token` |
//! | secret key | `with_secret_key` | `SWITCHBOT_SECRET_KEY` | `secret_key` |
//! | API host | `with_api_host_domain` | | `api_host_domain` |
//!
//! Empty environment values are ignored. The config file defaults to
//! `~/.config/switchbot-client/config.yml`; a missing file is not an error.
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//! use switchbot_client::config::ClientConfig;
//!
//! # fn example() -> switchbot_client::Result<()> {
//! let http = ClientConfig::new()
//!     .with_token("my-token")
//!     .with_secret_key("my-secret")
//!     .with_timeout(Duration::from_secs(5))
//!     .resolve()?;
//!
//! assert_eq!(http.base_url(), "https://api.switch-bot.com/v1.1");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::protocol::{Credentials, HttpConfig};

/// Environment variable holding the token.
pub const TOKEN_ENV: &str = "SWITCHBOT_OPEN_TOKEN";
/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "SWITCHBOT_SECRET_KEY";
/// Config file location relative to the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".config/switchbot-client/config.yml";

/// Contents of the YAML config file.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    token: Option<String>,
    secret_key: Option<String>,
    api_host_domain: Option<String>,
}

/// Builder for the transport configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    token: Option<String>,
    secret_key: Option<String>,
    api_host_domain: Option<String>,
    config_file: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates an empty configuration; everything comes from the
    /// environment or the config file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the secret key.
    #[must_use]
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Sets the API host, e.g. for a mock server.
    #[must_use]
    pub fn with_api_host_domain(mut self, api_host_domain: impl Into<String>) -> Self {
        self.api_host_domain = Some(api_host_domain.into());
        self
    }

    /// Reads this YAML file instead of the default one.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Sets the request timeout. Defaults to 10 seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolves against the process environment.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingCredential` if the token or the secret key
    ///   cannot be found anywhere
    /// - `ConfigError::Io` / `ConfigError::Yaml` if the config file exists
    ///   but cannot be read or parsed
    pub fn resolve(self) -> Result<HttpConfig> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolves with `env` as the environment lookup.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn resolve_with(self, env: impl Fn(&str) -> Option<String>) -> Result<HttpConfig> {
        let file = match self.config_file_path(&env) {
            Some(path) => load_file(&path)?,
            None => FileConfig::default(),
        };
        let env = |name: &str| env(name).filter(|value| !value.is_empty());

        let token = self
            .token
            .or_else(|| env(TOKEN_ENV))
            .or(file.token)
            .ok_or(ConfigError::MissingCredential("token"))?;
        let secret_key = self
            .secret_key
            .or_else(|| env(SECRET_KEY_ENV))
            .or(file.secret_key)
            .ok_or(ConfigError::MissingCredential("secret key"))?;

        let mut config = HttpConfig::new(Credentials::new(token, secret_key));
        if let Some(host) = self.api_host_domain.or(file.api_host_domain) {
            config = config.with_api_host_domain(host);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        tracing::debug!(base_url = %config.base_url(), "Resolved client configuration");
        Ok(config)
    }

    fn config_file_path(&self, env: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        self.config_file.clone().or_else(|| {
            env("HOME")
                .filter(|home| !home.is_empty())
                .map(|home| Path::new(&home).join(DEFAULT_CONFIG_FILE))
        })
    }
}

fn load_file(path: &Path) -> Result<FileConfig> {
    let shown = path.display().to_string();
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %shown, "No config file");
            return Ok(FileConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: shown,
                source,
            }
            .into());
        }
    };
    if text.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yml::from_str(&text).map_err(|source| {
        ConfigError::Yaml {
            path: shown,
            source,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::Error;

    fn temp_config(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("switchbot-{}.yml", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn missing_file() -> PathBuf {
        std::env::temp_dir().join(format!("switchbot-missing-{}.yml", uuid::Uuid::new_v4()))
    }

    #[test]
    fn explicit_wins() {
        let config = ClientConfig::new()
            .with_token("arg-token")
            .with_secret_key("arg-secret")
            .with_config_file(missing_file())
            .resolve_with(env(&[(TOKEN_ENV, "env-token"), (SECRET_KEY_ENV, "env-secret")]))
            .unwrap();

        assert_eq!(config.credentials().token(), "arg-token");
        assert_eq!(config.api_host_domain(), HttpConfig::DEFAULT_API_HOST_DOMAIN);
        assert_eq!(config.timeout(), HttpConfig::DEFAULT_TIMEOUT);
    }

    #[test]
    fn env_beats_file() {
        let path = temp_config("token: file-token\nsecret_key: file-secret\n");
        let config = ClientConfig::new()
            .with_config_file(&path)
            .resolve_with(env(&[(TOKEN_ENV, "env-token")]))
            .unwrap();

        assert_eq!(config.credentials().token(), "env-token");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn empty_env_is_ignored() {
        let path = temp_config(
            "token: file-token\nsecret_key: file-secret\napi_host_domain: http://localhost:8080\n",
        );
        let config = ClientConfig::new()
            .with_config_file(&path)
            .resolve_with(env(&[(TOKEN_ENV, ""), (SECRET_KEY_ENV, "")]))
            .unwrap();

        assert_eq!(config.credentials().token(), "file-token");
        assert_eq!(config.base_url(), "http://localhost:8080/v1.1");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_credentials() {
        let result = ClientConfig::new()
            .with_token("token")
            .with_config_file(missing_file())
            .resolve_with(env(&[]));

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingCredential("secret key")))
        ));
    }

    #[test]
    fn invalid_yaml() {
        let path = temp_config("token: [unclosed\n");
        let result = ClientConfig::new()
            .with_config_file(&path)
            .resolve_with(env(&[]));

        assert!(matches!(result, Err(Error::Config(ConfigError::Yaml { .. }))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn default_file_under_home() {
        let home = std::env::temp_dir().join(format!("switchbot-home-{}", uuid::Uuid::new_v4()));
        let dir = home.join(".config/switchbot-client");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.yml"), "token: t\nsecret_key: s\n").unwrap();

        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(3))
            .resolve_with(env(&[("HOME", home.to_str().unwrap())]))
            .unwrap();

        assert_eq!(config.credentials().token(), "t");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        std::fs::remove_dir_all(home).ok();
    }
}
