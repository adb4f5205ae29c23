//! Storybook events
//!
//! Two event streams meet in the controller:
//! - [`MediaEvent`]s arrive from the audio element (progress, metadata,
//!   end of media), at arbitrary times while the music page is active.
//! - [`StorybookEvent`]s are emitted by the controller for the UI to
//!   drain and render (page changes, playback flags, position updates).

use crate::types::Page;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Notifications from the underlying media element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Playback position advanced (the element's progress event)
    TimeUpdate {
        /// Current position reported by the element
        position: Duration,
    },

    /// Media metadata became available
    MetadataLoaded {
        /// Total duration reported by the element
        duration: Duration,
    },

    /// The media played through to its end
    Ended,
}

/// Events emitted by the controller for UI synchronization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorybookEvent {
    /// The visible page changed
    PageChanged {
        /// The page now rendered
        page: Page,
    },

    /// Playing/paused flag changed
    PlaybackChanged {
        /// Whether the media is playing
        is_playing: bool,
    },

    /// Position update (mirrors the element's progress events)
    PositionUpdate {
        /// Current playback position in seconds
        position_secs: f64,
        /// Total duration in seconds (0.0 until metadata loads)
        duration_secs: f64,
    },

    /// Media metadata loaded
    MediaLoaded {
        /// Total duration in seconds
        duration_secs: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// The media played through to its end
    PlaybackEnded,
}
