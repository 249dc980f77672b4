// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pseudo-status tracking for infrared remotes.
//!
//! [`PseudoStatus`] holds what a remote wrapper last commanded successfully;
//! [`StateChange`] is what gets applied to it.
//!
//! The cache is owned by one wrapper instance. Two wrappers built for the
//! same remote keep independent caches.

mod pseudo_status;
mod state_change;

pub use pseudo_status::PseudoStatus;
pub use state_change::StateChange;
