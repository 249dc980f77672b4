// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner settings for the infrared `setAll` command.

use std::fmt;

use crate::error::ValueError;

/// Air conditioner operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AcMode {
    /// `1`
    #[default]
    Auto,
    /// `2`
    Cool,
    /// `3`
    Dry,
    /// `4`
    Fan,
    /// `5`
    Heat,
}

impl AcMode {
    /// Returns the numeric wire value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Auto => 1,
            Self::Cool => 2,
            Self::Dry => 3,
            Self::Fan => 4,
            Self::Heat => 5,
        }
    }
}

impl TryFrom<u8> for AcMode {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Auto),
            2 => Ok(Self::Cool),
            3 => Ok(Self::Dry),
            4 => Ok(Self::Fan),
            5 => Ok(Self::Heat),
            _ => Err(ValueError::InvalidMode(value.to_string())),
        }
    }
}

impl fmt::Display for AcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Air conditioner fan speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AcFanSpeed {
    /// `1`
    #[default]
    Auto,
    /// `2`
    Low,
    /// `3`
    Medium,
    /// `4`
    High,
}

impl AcFanSpeed {
    /// Returns the numeric wire value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Auto => 1,
            Self::Low => 2,
            Self::Medium => 3,
            Self::High => 4,
        }
    }
}

impl TryFrom<u8> for AcFanSpeed {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Auto),
            2 => Ok(Self::Low),
            3 => Ok(Self::Medium),
            4 => Ok(Self::High),
            _ => Err(ValueError::InvalidMode(value.to_string())),
        }
    }
}

impl fmt::Display for AcFanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Target temperature in degrees Celsius.
///
/// Rendered without loss of precision; whole degrees keep a `.0`.
///
/// # Examples
///
/// ```
/// use switchbot_client::types::Temperature;
///
/// assert_eq!(Temperature::new(20.0).unwrap().to_string(), "20.0");
/// assert_eq!(Temperature::new(22.5).unwrap().to_string(), "22.5");
/// assert_eq!(Temperature::new(22.25).unwrap().to_string(), "22.25");
/// assert!(Temperature::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    /// Temperature assumed before anything was set.
    pub const DEFAULT: Self = Self(25.0);

    /// Creates a temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTemperature` for NaN or infinite values.
    pub fn new(celsius: f64) -> Result<Self, ValueError> {
        if !celsius.is_finite() {
            return Err(ValueError::InvalidTemperature(celsius.to_string()));
        }
        Ok(Self(celsius))
    }

    /// Returns the value in degrees Celsius.
    #[must_use]
    pub const fn celsius(&self) -> f64 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Shortest form that reads back as the same value, with `.0` kept on
/// whole degrees.
impl fmt::Display for Temperature {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl TryFrom<f64> for Temperature {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
