//! Abstract media element
//!
//! The seam between the controller and whatever actually plays audio
//! (an HTML audio element in the browser, a stub in tests).

use crate::error::Result;
use std::time::Duration;

/// Platform-agnostic handle to a single audio element
///
/// The controller owns exactly one implementor and is the only writer.
/// Only side effects travel through this trait; progress, metadata, and
/// end-of-media notifications come back the other way, as
/// [`MediaEvent`](crate::events::MediaEvent)s delivered by the host.
pub trait MediaElement {
    /// Ask the element to start or resume playback
    ///
    /// # Returns
    /// * `Ok(())` - The element accepted the request
    /// * `Err(PlaybackError::AutoplayBlocked)` - The request was refused
    ///   (e.g. the browser blocked playback without a user gesture)
    fn play(&mut self) -> Result<()>;

    /// Pause playback. Pausing an already-paused element is a no-op.
    fn pause(&mut self);

    /// Move the playback position
    fn set_position(&mut self, position: Duration);

    /// Apply an output gain in `[0.0, 1.0]`
    fn set_gain(&mut self, gain: f32);
}

/// Dummy media element for unit tests
///
/// Accepts every request and discards it; tests that need to observe the
/// element record through their own implementor instead.
#[cfg(test)]
pub struct DummyMediaElement;

#[cfg(test)]
impl MediaElement for DummyMediaElement {
    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn set_position(&mut self, _position: Duration) {}

    fn set_gain(&mut self, _gain: f32) {}
}
