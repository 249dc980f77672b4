// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Family-specific operating modes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

// ============================================================================
// CurtainMode
// ============================================================================

/// Motor mode used by `setPosition` on curtains.
///
/// # Examples
///
/// ```
/// use switchbot_client::types::CurtainMode;
///
/// assert_eq!(CurtainMode::Silent.as_str(), "1");
/// assert_eq!("ff".parse::<CurtainMode>().unwrap(), CurtainMode::Default);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurtainMode {
    /// Fast movement (`0`).
    Performance,
    /// Quiet movement (`1`).
    Silent,
    /// Whatever the device is configured with (`ff`).
    #[default]
    Default,
}

impl CurtainMode {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Performance => "0",
            Self::Silent => "1",
            Self::Default => "ff",
        }
    }
}

impl fmt::Display for CurtainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurtainMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0" | "performance" => Ok(Self::Performance),
            "1" | "silent" => Ok(Self::Silent),
            "ff" | "default" => Ok(Self::Default),
            _ => Err(ValueError::InvalidMode(s.to_string())),
        }
    }
}

// ============================================================================
// HumidifierMode
// ============================================================================

/// Humidifier `setMode` parameter.
///
/// The vendor overloads a single parameter: `auto`, three preset levels
/// (`101`, `102`, `103`) or a raw atomization efficiency in percent.
///
/// # Examples
///
/// ```
/// use switchbot_client::types::HumidifierMode;
///
/// assert_eq!(HumidifierMode::Auto.to_string(), "auto");
/// assert_eq!(HumidifierMode::efficiency(40).unwrap().to_string(), "40");
/// assert_eq!(HumidifierMode::Medium.to_string(), "102");
/// assert!(HumidifierMode::efficiency(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumidifierMode {
    /// Automatic mode.
    Auto,
    /// Preset 34% (`101`).
    Low,
    /// Preset 67% (`102`).
    Medium,
    /// Preset 100% (`103`).
    High,
    /// Explicit atomization efficiency, 0-100.
    Efficiency(u8),
}

impl HumidifierMode {
    /// Creates an explicit atomization efficiency mode.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `percentage` exceeds 100.
    pub fn efficiency(percentage: u8) -> Result<Self, ValueError> {
        if percentage > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(percentage),
            });
        }
        Ok(Self::Efficiency(percentage))
    }
}

impl fmt::Display for HumidifierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Low => f.write_str("101"),
            Self::Medium => f.write_str("102"),
            Self::High => f.write_str("103"),
            Self::Efficiency(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for HumidifierMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "101" => Ok(Self::Low),
            "102" => Ok(Self::Medium),
            "103" => Ok(Self::High),
            other => other
                .parse::<u8>()
                .map_err(|_| ValueError::InvalidMode(s.to_string()))
                .and_then(Self::efficiency),
        }
    }
}

// ============================================================================
// FanMode
// ============================================================================

/// Smart fan mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FanMode {
    /// Constant airflow (`1`).
    #[default]
    Standard,
    /// Varying airflow (`2`).
    Natural,
}

impl FanMode {
    /// Returns the numeric wire value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Natural => 2,
        }
    }
}

impl TryFrom<i64> for FanMode {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Standard),
            2 => Ok(Self::Natural),
            _ => Err(ValueError::InvalidMode(value.to_string())),
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curtain_mode_parse() {
        assert_eq!("0".parse::<CurtainMode>().unwrap(), CurtainMode::Performance);
        assert_eq!("Silent".parse::<CurtainMode>().unwrap(), CurtainMode::Silent);
        assert_eq!("FF".parse::<CurtainMode>().unwrap(), CurtainMode::Default);
        assert!("2".parse::<CurtainMode>().is_err());
    }

    #[test]
    fn humidifier_mode_parse() {
        assert_eq!("auto".parse::<HumidifierMode>().unwrap(), HumidifierMode::Auto);
        assert_eq!("103".parse::<HumidifierMode>().unwrap(), HumidifierMode::High);
        assert_eq!(
            "55".parse::<HumidifierMode>().unwrap(),
            HumidifierMode::Efficiency(55)
        );
        assert!("150".parse::<HumidifierMode>().is_err());
        assert!("turbo".parse::<HumidifierMode>().is_err());
    }

    #[test]
    fn fan_mode_values() {
        assert_eq!(FanMode::Natural.to_string(), "2");
        assert_eq!(FanMode::try_from(1).unwrap(), FanMode::Standard);
        assert!(FanMode::try_from(3).is_err());
    }
}
