// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Changes that can be memorized in a [`PseudoStatus`](super::PseudoStatus).
//!
//! A remote wrapper computes the change that matches the command it is about
//! to send, sends it, and applies the change only if the API answered with
//! status code 100.

use crate::types::{AcFanSpeed, AcMode, PowerState, Temperature};

/// A single memorizable change.
///
/// # Examples
///
/// ```
/// use switchbot_client::state::{PseudoStatus, StateChange};
/// use switchbot_client::types::{PowerState, Temperature};
///
/// let mut status = PseudoStatus::new();
/// status.apply(&StateChange::Power(PowerState::On));
/// status.apply(&StateChange::Temperature(Temperature::new(21.0).unwrap()));
///
/// assert_eq!(status.power(), Some(PowerState::On));
/// assert_eq!(status.raw_data()["temperature"], 21.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    /// Power state.
    Power(PowerState),
    /// Target temperature.
    Temperature(Temperature),
    /// Operating mode.
    Mode(AcMode),
    /// Fan speed.
    FanSpeed(AcFanSpeed),
    /// Several fields at once, e.g. after `setAll`.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates the change memorized after a successful `setAll`.
    #[must_use]
    pub fn set_all(
        temperature: Temperature,
        mode: AcMode,
        fan_speed: AcFanSpeed,
        power: PowerState,
    ) -> Self {
        Self::Batch(vec![
            Self::Temperature(temperature),
            Self::Mode(mode),
            Self::FanSpeed(fan_speed),
            Self::Power(power),
        ])
    }
}
