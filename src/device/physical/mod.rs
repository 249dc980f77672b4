// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wrappers for devices with a status endpoint.

/// Declares a physical wrapper: the struct, the device types it serves,
/// its [`DeviceHandle`](crate::capabilities::DeviceHandle) impl and its
/// validating [`FromRecord`](crate::device::FromRecord) impl.
macro_rules! physical_wrapper {
    ($(#[$meta:meta])* $name:ident => [$($device_type:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<P: $crate::protocol::Protocol> {
            core: $crate::device::DeviceCore<P>,
        }

        impl<P: $crate::protocol::Protocol> $name<P> {
            /// Device types served by this wrapper.
            pub const DEVICE_TYPES: &'static [$crate::registry::DeviceType] =
                &[$($crate::registry::DeviceType::$device_type),+];
        }

        impl<P: $crate::protocol::Protocol> $crate::capabilities::DeviceHandle for $name<P> {
            type Protocol = P;

            fn core(&self) -> &$crate::device::DeviceCore<P> {
                &self.core
            }
        }

        impl<P: $crate::protocol::Protocol> $crate::device::FromRecord<P> for $name<P> {
            async fn from_record(
                api: $crate::api::ApiClient<P>,
                record: &$crate::device::DeviceRecord,
            ) -> $crate::error::Result<Self> {
                let core =
                    $crate::device::DeviceCore::physical(api, record, Self::DEVICE_TYPES).await?;
                Ok(Self { core })
            }
        }
    };
}

mod curtain;
mod humidifier;
mod light;
mod lock;
mod sensor;
mod smart_fan;
mod switch;
mod vacuum;

pub use curtain::Curtain;
pub use humidifier::Humidifier;
pub use light::{ColorBulb, StripLight};
pub use lock::Lock;
pub use sensor::{ContactSensor, Meter, MotionSensor};
pub use smart_fan::SmartFan;
pub use switch::{Bot, Plug, PlugMini};
pub use vacuum::RobotVacuum;

use crate::capabilities::{DeviceHandle, StatusReadable};
use crate::error::Result;
use crate::protocol::Protocol;
use crate::response::DeviceStatus;

physical_wrapper! {
    /// Hubs, cameras and the button remote.
    ///
    /// These expose no family operations; the status is returned untyped.
    BasicDevice => [Hub, HubPlus, HubMini, Hub2, IndoorCam, Remote]
}

impl<P: Protocol> StatusReadable for BasicDevice<P> {
    type Status = DeviceStatus;

    async fn status(&self) -> Result<Self::Status> {
        self.core().fetch_status().await
    }
}
