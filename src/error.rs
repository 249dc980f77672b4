// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `switchbot_client` library.
//!
//! Hard failures (transport problems, rejected credentials, malformed
//! envelopes, records that cannot be classified, type mismatches) are
//! reported through [`Error`]. Business statuses reported by the vendor
//! inside a well-formed envelope, such as "device offline", are **not**
//! errors: they come back as a [`CommandResult`](crate::CommandResult) so the
//! caller can decide what to do with them.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Credentials or configuration could not be resolved.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error occurred during communication with the API.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response body.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred while building or using a device.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// An id lookup matched more than one entry.
    #[error("duplicate {resource} id: {id}")]
    DuplicateId {
        /// The kind of resource that was looked up (`"device"`, `"scene"`).
        resource: &'static str,
        /// The id that matched several entries.
        id: String,
    },
}

impl Error {
    /// Returns `true` if the API rejected the credentials.
    ///
    /// Callers typically react to this by refreshing the token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::Unauthorized { .. }))
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// A color string is neither `#rrggbb` nor `r:g:b`.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A mode string or number is not known for this family.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// A temperature is not a finite number.
    #[error("invalid temperature: {0}")]
    InvalidTemperature(String),
}

/// Errors raised while resolving client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No value could be found for a required credential.
    #[error("no {0} specified (argument, environment or config file)")]
    MissingCredential(&'static str),

    /// The config file exists but could not be read.
    #[error("cannot read config file {path}: {source}")]
    Io {
        /// Path of the config file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for the expected mapping.
    #[error("invalid config file {path}: {source}")]
    Yaml {
        /// Path of the config file.
        path: String,
        /// Underlying YAML error.
        #[source]
        source: serde_yml::Error,
    },
}

/// Errors related to communication with the SwitchBot API.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the token or signature.
    #[error("unauthorized: user permission is denied due to invalid token ({body})")]
    Unauthorized {
        /// Raw response text.
        body: String,
    },

    /// The response is not a `{statusCode, message, body}` envelope.
    #[error("malformed response: {body}")]
    MalformedResponse {
        /// Raw response text.
        body: String,
    },

    /// A credential cannot be encoded as an HTTP header.
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),

    /// The secret key cannot be used as an HMAC key.
    #[error("invalid secret key")]
    InvalidSecretKey,
}

/// Errors related to parsing API payloads.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// Errors related to device construction and device operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The record carries a `deviceType` that is not in the registry.
    #[error("unknown device type: {0}")]
    UnknownDeviceType(String),

    /// The record carries a `remoteType` that is not in the registry.
    #[error("unknown remote type: {0}")]
    UnknownRemoteType(String),

    /// The record has neither `deviceType` nor `remoteType`, or lacks an id.
    #[error("invalid device record: {0}")]
    InvalidDeviceRecord(String),

    /// The type reported by the API differs from the wrapper's type.
    #[error("illegal device type for {device_id}: expected {expected}, actual {actual}")]
    TypeMismatch {
        /// Id of the device being constructed.
        device_id: String,
        /// Type the wrapper was built for.
        expected: String,
        /// Type reported by the API.
        actual: String,
    },

    /// No device with this id exists on the account.
    #[error("device not found: {0}")]
    NotFound(String),

    /// Status fetch answered with code 190.
    #[error(
        "wrong device id or trying to get infrared virtual device status: {device_id} ({message})"
    )]
    StatusUnavailable {
        /// Id of the device whose status was requested.
        device_id: String,
        /// Message returned alongside the 190 status code.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
