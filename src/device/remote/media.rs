// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! TV-like and playback remotes.

use crate::command::InfraredCommand;
use crate::error::Result;
use crate::protocol::{CommandResult, Protocol};

remote_wrapper! {
    /// TV, IPTV streamer or set top box.
    TvRemote => [Tv, IptvStreamer, SetTopBox]
}

impl<P: Protocol> TvRemote<P> {
    /// Jumps to `channel`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_channel(&self, channel: u32) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::SetChannel(channel)).await
    }

    /// Volume up.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn volume_up(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::VolumeAdd).await
    }

    /// Volume down.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn volume_down(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::VolumeSub).await
    }

    /// Next channel.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn channel_up(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::ChannelAdd).await
    }

    /// Previous channel.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn channel_down(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::ChannelSub).await
    }
}

remote_wrapper! {
    /// DVD player or speaker.
    MediaRemote => [Dvd, Speaker]
}

impl<P: Protocol> MediaRemote<P> {
    /// Toggles mute.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn set_mute(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::SetMute).await
    }

    /// Starts playback.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn play(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::Play).await
    }

    /// Pauses playback.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn pause(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::Pause).await
    }

    /// Stops playback.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn stop(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::Stop).await
    }

    /// Next track.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn next(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::Next).await
    }

    /// Previous track.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn previous(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::Previous).await
    }

    /// Fast forward.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn fast_forward(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::FastForward).await
    }

    /// Rewind.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn rewind(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::Rewind).await
    }

    /// Volume up.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn volume_up(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::VolumeAdd).await
    }

    /// Volume down.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or envelope failure.
    pub async fn volume_down(&self) -> Result<CommandResult> {
        self.core.send(&InfraredCommand::VolumeSub).await
    }
}
