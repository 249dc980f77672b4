// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded integer levels used in command parameters.
//!
//! All of these render with `Display` as a bare decimal, which is what the
//! API expects inside a `parameter` string.

use std::fmt;

use crate::error::ValueError;

macro_rules! bounded_level {
    ($(#[$meta:meta])* $name:ident($repr:ty), $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($repr);

        impl $name {
            /// Smallest accepted value.
            pub const MIN: Self = Self($min);

            /// Largest accepted value.
            pub const MAX: Self = Self($max);

            /// Creates a checked value.
            ///
            /// # Errors
            ///
            /// Returns `ValueError::OutOfRange` if `value` is outside
            /// `MIN..=MAX`.
            pub fn new(value: $repr) -> Result<Self, ValueError> {
                if !($min..=$max).contains(&value) {
                    return Err(ValueError::OutOfRange {
                        min: u16::from($min as $repr),
                        max: u16::from($max as $repr),
                        actual: u16::from(value),
                    });
                }
                Ok(Self(value))
            }

            /// Creates a value, clamping into `MIN..=MAX`.
            #[must_use]
            pub fn clamped(value: $repr) -> Self {
                Self(value.clamp($min, $max))
            }

            /// Returns the raw value.
            #[must_use]
            pub const fn value(&self) -> $repr {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<$repr> for $name {
            type Error = ValueError;

            fn try_from(value: $repr) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

bounded_level! {
    /// Light brightness in percent (1-100).
    ///
    /// # Examples
    ///
    /// ```
    /// use switchbot_client::types::Brightness;
    ///
    /// assert_eq!(Brightness::new(75).unwrap().to_string(), "75");
    /// assert!(Brightness::new(0).is_err());
    /// ```
    Brightness(u8), 1, 100
}

bounded_level! {
    /// White color temperature in kelvin (2700-6500).
    ColorTemperature(u16), 2700, 6500
}

bounded_level! {
    /// Curtain position in percent, 0 is fully open and 100 fully closed.
    SlidePosition(u8), 0, 100
}

bounded_level! {
    /// Smart fan oscillation range in degrees (0-120).
    ShakeRange(u8), 0, 120
}

bounded_level! {
    /// Smart fan speed step (1-4).
    FanSpeed(u8), 1, 4
}

bounded_level! {
    /// Robot vacuum suction power level (0-3).
    PowLevel(u8), 0, 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_bounds() {
        assert_eq!(Brightness::new(1).unwrap(), Brightness::MIN);
        assert_eq!(Brightness::new(100).unwrap(), Brightness::MAX);
        assert_eq!(
            Brightness::new(101),
            Err(ValueError::OutOfRange {
                min: 1,
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn color_temperature_bounds() {
        assert!(ColorTemperature::new(2699).is_err());
        assert_eq!(ColorTemperature::new(4000).unwrap().value(), 4000);
        assert!(ColorTemperature::new(6501).is_err());
    }

    #[test]
    fn slide_position_accepts_zero() {
        assert_eq!(SlidePosition::new(0).unwrap().value(), 0);
        assert!(SlidePosition::new(101).is_err());
    }

    #[test]
    fn fan_levels() {
        assert!(FanSpeed::new(0).is_err());
        assert!(FanSpeed::new(5).is_err());
        assert_eq!(ShakeRange::new(120).unwrap().to_string(), "120");
        assert!(PowLevel::new(4).is_err());
        assert_eq!(PowLevel::try_from(3).unwrap(), PowLevel::MAX);
    }

    #[test]
    fn clamped() {
        assert_eq!(Brightness::clamped(0), Brightness::MIN);
        assert_eq!(ColorTemperature::clamped(9000), ColorTemperature::MAX);
        assert_eq!(ShakeRange::clamped(60).value(), 60);
    }
}
