// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request signing for API v1.1.
//!
//! Each request carries the token, a millisecond timestamp, a nonce and a
//! signature computed as `base64(HMAC-SHA256(secret, token ‖ t ‖ nonce))`.
//! The server checks the timestamp against its own clock, so a captured
//! request cannot be replayed outside that window.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ProtocolError;

type HmacSha256 = Hmac<Sha256>;

/// Token and secret key issued by the SwitchBot app.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    secret_key: String,
}

impl Credentials {
    /// Creates credentials from a token and its secret key.
    #[must_use]
    pub fn new(token: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Returns the token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Signs a request issued at `timestamp_ms` (unix epoch milliseconds).
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidSecretKey`] if the secret cannot key
    /// the HMAC.
    pub fn sign(&self, timestamp_ms: i64, nonce: &str) -> Result<AuthHeaders, ProtocolError> {
        let t = timestamp_ms.to_string();

        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .map_err(|_| ProtocolError::InvalidSecretKey)?;
        mac.update(self.token.as_bytes());
        mac.update(t.as_bytes());
        mac.update(nonce.as_bytes());
        let sign = STANDARD.encode(mac.finalize().into_bytes());

        Ok(AuthHeaders {
            authorization: self.token.clone(),
            t,
            sign,
            nonce: nonce.to_string(),
        })
    }

    /// Signs a request issued now, with an empty nonce.
    ///
    /// # Errors
    ///
    /// See [`sign`](Self::sign).
    pub fn sign_now(&self) -> Result<AuthHeaders, ProtocolError> {
        self.sign(chrono::Utc::now().timestamp_millis(), "")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Header values for one signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// `Authorization` header: the bare token.
    pub authorization: String,
    /// `t` header: unix epoch milliseconds.
    pub t: String,
    /// `sign` header: base64 HMAC-SHA256 signature.
    pub sign: String,
    /// `nonce` header.
    pub nonce: String,
}
