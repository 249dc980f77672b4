// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type for color bulbs and strip lights.
//!
//! The API exchanges colors as `"{r}:{g}:{b}"` with decimal channels. Users
//! usually think in `#rrggbb`, so both forms parse into [`RgbColor`].

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use switchbot_client::types::RgbColor;
///
/// let color = RgbColor::from_hex("#ff8000").unwrap();
/// assert_eq!(color.to_parameter(), "255:128:0");
/// assert_eq!(color.to_hex(), "#ff8000");
///
/// let same: RgbColor = "255:128:0".parse().unwrap();
/// assert_eq!(color, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses a `#rrggbb` (or `rrggbb`) hex string.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidColor` if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || ValueError::InvalidColor(hex.to_string());

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Parses the API's `r:g:b` decimal form.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidColor` unless there are exactly three
    /// channels in 0-255.
    pub fn from_parameter(value: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidColor(value.to_string());
        let mut channels = value
            .split(':')
            .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()));

        let (Some(red), Some(green), Some(blue), None) = (
            channels.next(),
            channels.next(),
            channels.next(),
            channels.next(),
        ) else {
            return Err(invalid());
        };
        Ok(Self::new(red?, green?, blue?))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the `r:g:b` form used in command parameters.
    #[must_use]
    pub fn to_parameter(&self) -> String {
        format!("{}:{}:{}", self.red, self.green, self.blue)
    }

    /// Returns the lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    /// Accepts both `#rrggbb` and `r:g:b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            Self::from_parameter(s)
        } else {
            Self::from_hex(s)
        }
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}
