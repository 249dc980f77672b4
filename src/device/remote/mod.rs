// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wrappers for infrared remotes.
//!
//! Every remote owns a [`PseudoStatus`](crate::state::PseudoStatus) that
//! starts unknown and is updated only by commands the API accepted with
//! status code 100. Methods that change memorized state take `&mut self`.

/// Declares a remote wrapper: the struct with its pseudo-status, the remote
/// types it serves, its handle and pseudo-status impls, its validating
/// [`FromRecord`](crate::device::FromRecord) impl and `send_custom`.
macro_rules! remote_wrapper {
    ($(#[$meta:meta])* $name:ident => [$($remote_type:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<P: $crate::protocol::Protocol> {
            core: $crate::device::DeviceCore<P>,
            pseudo_status: $crate::state::PseudoStatus,
        }

        impl<P: $crate::protocol::Protocol> $name<P> {
            /// Remote types served by this wrapper.
            pub const REMOTE_TYPES: &'static [$crate::registry::RemoteType] =
                &[$($crate::registry::RemoteType::$remote_type),+];

            /// Presses a user-defined button.
            ///
            /// Nothing is memorized.
            ///
            /// # Errors
            ///
            /// Returns an error on transport or envelope failure.
            pub async fn send_custom(
                &self,
                button: &str,
            ) -> $crate::error::Result<$crate::protocol::CommandResult> {
                self.core
                    .send(&$crate::command::CustomCommand::new(button))
                    .await
            }
        }

        impl<P: $crate::protocol::Protocol> $crate::capabilities::DeviceHandle for $name<P> {
            type Protocol = P;

            fn core(&self) -> &$crate::device::DeviceCore<P> {
                &self.core
            }
        }

        impl<P: $crate::protocol::Protocol> $crate::capabilities::PseudoStatusBacked
            for $name<P>
        {
            fn pseudo_status(&self) -> &$crate::state::PseudoStatus {
                &self.pseudo_status
            }

            fn pseudo_status_mut(&mut self) -> &mut $crate::state::PseudoStatus {
                &mut self.pseudo_status
            }
        }

        impl<P: $crate::protocol::Protocol> $crate::device::FromRecord<P> for $name<P> {
            async fn from_record(
                api: $crate::api::ApiClient<P>,
                record: &$crate::device::DeviceRecord,
            ) -> $crate::error::Result<Self> {
                let core =
                    $crate::device::DeviceCore::remote(api, record, Self::REMOTE_TYPES).await?;
                Ok(Self {
                    core,
                    pseudo_status: $crate::state::PseudoStatus::new(),
                })
            }
        }
    };
}

mod air_conditioner;
mod fan;
mod light;
mod media;

pub use air_conditioner::AirConditioner;
pub use fan::FanRemote;
pub use light::LightRemote;
pub use media::{MediaRemote, TvRemote};

remote_wrapper! {
    /// Remote with power buttons and custom buttons only.
    InfraredRemote => [Projector, Camera, AirPurifier, WaterHeater, VacuumCleaner, Others]
}

#[cfg(test)]
pub(crate) mod testing {
    //! Builders for remote unit tests.

    use serde_json::json;

    use crate::api::ApiClient;
    use crate::api::testing::MockProtocol;
    use crate::device::{DeviceRecord, FromRecord};

    /// Builds a remote over a mock whose first response is the remote list
    /// used for validation; `then` queues the rest.
    pub async fn build<W: FromRecord<MockProtocol>>(
        remote_type: &str,
        then: impl FnOnce(MockProtocol) -> MockProtocol,
    ) -> W {
        let listed = json!({"deviceId": "01-IR", "deviceName": "remote", "remoteType": remote_type});
        let protocol = then(MockProtocol::new().ok(json!({
            "deviceList": [],
            "infraredRemoteList": [listed.clone()],
        })));
        let record = DeviceRecord::from_value(&listed).unwrap();
        W::from_record(ApiClient::new(protocol), &record)
            .await
            .unwrap()
    }
}
