// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `switchbot_client` - A Rust library to control SwitchBot devices through
//! the SwitchBot cloud API.
//!
//! This library provides async, typed access to the devices, infrared
//! remotes, scenes and webhooks of a SwitchBot account.
//!
//! # Supported Features
//!
//! - **Signed requests**: HMAC-SHA256 token/secret authentication (API v1.1)
//! - **Typed devices**: one wrapper per device family, built from the
//!   account's device list and validated against the API
//! - **Typed statuses**: per-family status structures with the raw body kept
//! - **Infrared remotes**: locally memorized power and climate state
//! - **Scenes and webhooks**: list, execute, set up, query, update, delete
//!
//! # Quick Start
//!
//! ```no_run
//! use switchbot_client::SwitchBotClient;
//! use switchbot_client::capabilities::StatusReadable;
//! use switchbot_client::device::Meter;
//!
//! #[tokio::main]
//! async fn main() -> switchbot_client::Result<()> {
//!     // Token and secret from SWITCHBOT_OPEN_TOKEN / SWITCHBOT_SECRET_KEY
//!     // or ~/.config/switchbot-client/config.yml
//!     let client = SwitchBotClient::from_env()?;
//!
//!     let meter: Meter<_> = client.device_as("C271111EC0AB").await?;
//!     let status = meter.status().await?;
//!     println!("{} °C, {} %", status.temperature, status.humidity);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors and business statuses
//!
//! Transport failures, rejected credentials, malformed envelopes and type
//! mismatches are returned as [`Error`]. A well-formed response carrying a
//! vendor status such as 161 "device offline" is **not** an error: commands
//! return a [`CommandResult`] and the caller decides.
//!
//! ```no_run
//! use switchbot_client::SwitchBotClient;
//! use switchbot_client::capabilities::Controllable;
//! use switchbot_client::device::Bot;
//! use switchbot_client::protocol::status_code;
//!
//! # async fn example() -> switchbot_client::Result<()> {
//! let client = SwitchBotClient::from_env()?;
//! let bot: Bot<_> = client.device_as("E2F6032048AB").await?;
//!
//! let result = bot.turn_on().await?;
//! if result.status_code == status_code::DEVICE_OFFLINE {
//!     println!("bot is offline: {}", result.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod capabilities;
mod client;
pub mod command;
pub mod config;
pub mod device;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod response;
pub mod scene;
pub mod state;
pub mod types;
pub mod webhook;

pub use api::ApiClient;
pub use client::SwitchBotClient;
pub use config::ClientConfig;
pub use device::{Device, DeviceFactory, DeviceInfo, DeviceKind, DeviceRecord};
pub use error::{ConfigError, DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{CommandResult, Credentials, HttpClient, HttpConfig, Protocol};
pub use registry::{DeviceType, RemoteType};
pub use scene::Scene;
pub use webhook::Webhook;
