//! Error types for the storybook controller

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The media element refused to start playback (blocked autoplay)
    #[error("Playback attempt was rejected by the media element")]
    AutoplayBlocked,

    /// No media element has been attached to the controller
    #[error("No media element attached")]
    NoMediaElement,

    /// Invalid seek position
    #[error("Invalid seek position: {0:?}")]
    InvalidSeekPosition(std::time::Duration),

    /// Media element error
    #[error("Media element error: {0}")]
    MediaElement(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
