//! HTML audio element behind the `MediaElement` trait

use crate::error::{PlaybackError, Result};
use crate::media::MediaElement;
use std::time::Duration;
use web_sys::HtmlAudioElement;

/// `MediaElement` backed by a real `<audio>` element
///
/// `play()` only reports a synchronous refusal; the browser's actual
/// accept/reject arrives later through the play promise, which the host
/// page forwards to the controller's `notifyPlaybackConfirmed` /
/// `notifyPlaybackBlocked` entry points.
pub struct DomMediaElement {
    element: HtmlAudioElement,
}

impl DomMediaElement {
    /// Wrap an audio element from the page
    pub fn new(element: HtmlAudioElement) -> Self {
        Self { element }
    }
}

impl MediaElement for DomMediaElement {
    fn play(&mut self) -> Result<()> {
        match self.element.play() {
            Ok(_promise) => Ok(()),
            Err(_) => Err(PlaybackError::AutoplayBlocked),
        }
    }

    fn pause(&mut self) {
        // pause() only fails on a detached element; nothing to do then
        self.element.pause().ok();
    }

    fn set_position(&mut self, position: Duration) {
        self.element.set_current_time(position.as_secs_f64());
    }

    fn set_gain(&mut self, gain: f32) {
        self.element.set_volume(f64::from(gain));
    }
}
