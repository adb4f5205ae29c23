//! Storybook controller - core orchestration
//!
//! Owns the page/playback state machine and drives the attached media
//! element. User intents mutate state synchronously; the element reports
//! back through [`MediaEvent`]s delivered by the host.

use crate::{
    error::PlaybackError,
    events::{MediaEvent, StorybookEvent},
    media::MediaElement,
    types::{Page, StorybookConfig},
    volume::Volume,
};
use std::time::Duration;

/// Central page and playback management
///
/// State machine over `Page x playback status`:
/// - cover --(start reading)--> music: reset position, attempt autoplay
/// - music --(next page)--> final: unconditional pause
/// - final --(read again)--> cover: no playback side effect
///
/// Transport controls (play/pause, seek, volume, mute) only act while the
/// music page is showing; the other pages render no transport UI.
pub struct StorybookController {
    // State
    page: Page,
    playing: bool,
    position: Duration,
    duration: Option<Duration>,

    // Settings
    volume: Volume,
    audio_src: String,

    // The single audio element, owned exclusively by this controller
    media: Option<Box<dyn MediaElement>>,

    // Autoplay requested before metadata arrived; retried on load
    pending_autoplay: bool,

    // Event queue for UI synchronization
    pending_events: Vec<StorybookEvent>,
}

impl StorybookController {
    /// Create new controller on the cover page
    pub fn new(config: StorybookConfig) -> Self {
        Self {
            page: Page::Cover,
            playing: false,
            position: Duration::ZERO,
            duration: None,
            volume: Volume::new(config.volume),
            audio_src: config.audio_src,
            media: None,
            pending_autoplay: false,
            pending_events: Vec::new(),
        }
    }

    /// Attach the media element this controller drives
    ///
    /// The current effective volume is applied immediately so the element
    /// never plays at its own default level.
    pub fn set_media_element(&mut self, media: Box<dyn MediaElement>) {
        self.media = Some(media);
        self.apply_gain();
    }

    // ===== Navigation =====

    /// Cover -> music: start the story
    ///
    /// Resets the playback position to zero and attempts autoplay. A
    /// rejected attempt (blocked autoplay) leaves the controller paused
    /// with no error surfaced; the reader presses play manually. If media
    /// metadata has not loaded yet, the attempt is deferred until it does.
    pub fn start_reading(&mut self) {
        if self.page != Page::Cover {
            return;
        }

        self.go_to_page(Page::Music);

        if self.is_loaded() {
            self.begin_playback();
        } else {
            self.pending_autoplay = true;
        }
    }

    /// Music -> final: turn past the music page
    ///
    /// Always pauses, regardless of prior playback state. This is the
    /// only cancellation point: an in-flight play request is not aborted,
    /// its late outcome just loses to the pause (see [`confirm_playback`]).
    ///
    /// [`confirm_playback`]: StorybookController::confirm_playback
    pub fn next_page(&mut self) {
        if self.page != Page::Music {
            return;
        }

        self.pending_autoplay = false;
        if let Some(ref mut media) = self.media {
            media.pause();
        }
        self.set_playing(false);
        self.go_to_page(Page::Final);
    }

    /// Final -> cover: back to the start for another read
    pub fn read_again(&mut self) {
        if self.page != Page::Final {
            return;
        }

        self.go_to_page(Page::Cover);
    }

    fn go_to_page(&mut self, page: Page) {
        self.page = page;
        self.emit_page_changed(page);
    }

    // ===== Transport =====

    /// Toggle play/pause on the music page
    ///
    /// No-op on any other page; the control is not rendered there and the
    /// element is already paused.
    pub fn toggle_play(&mut self) {
        if self.page != Page::Music {
            return;
        }

        if self.playing {
            if let Some(ref mut media) = self.media {
                media.pause();
            }
            self.set_playing(false);
        } else {
            self.attempt_play();
        }
    }

    /// Seek to a position in the track
    ///
    /// The stored position mirrors the request immediately (optimistic,
    /// not waiting for the element's next progress event). Once metadata
    /// is loaded the position is clamped to `[0, duration]`.
    pub fn seek(&mut self, position: Duration) {
        let position = match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        };

        if let Some(ref mut media) = self.media {
            media.set_position(position);
        }
        self.position = position;
        self.emit_position_update();
    }

    /// Set volume level (0-100)
    ///
    /// A non-zero level also clears mute.
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.apply_gain();
        self.emit_volume_changed();
    }

    /// Toggle mute without touching the stored volume level
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.apply_gain();
        self.emit_volume_changed();
    }

    // ===== Media events =====

    /// Feed a notification from the media element into the state machine
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate { position } => {
                self.position = position;
                self.emit_position_update();
            }
            MediaEvent::MetadataLoaded { duration } => {
                self.duration = Some(duration);
                self.pending_events.push(StorybookEvent::MediaLoaded {
                    duration_secs: duration.as_secs_f64(),
                });

                // Autoplay that was requested before the metadata arrived
                if self.pending_autoplay && self.page == Page::Music {
                    self.pending_autoplay = false;
                    self.begin_playback();
                }
            }
            MediaEvent::Ended => {
                self.set_playing(false);
                self.position = Duration::ZERO;
                self.pending_events.push(StorybookEvent::PlaybackEnded);
            }
        }
    }

    /// Record a late play-request success
    ///
    /// Only honored while the music page is still showing: navigating away
    /// pauses unconditionally, and that pause wins over a play request
    /// that resolves afterwards.
    pub fn confirm_playback(&mut self) {
        if self.page == Page::Music {
            self.set_playing(true);
        }
    }

    /// Record a late play-request rejection
    pub fn playback_rejected(&mut self) {
        self.set_playing(false);
    }

    // ===== State queries =====

    /// Get the page currently rendered
    pub fn get_page(&self) -> Page {
        self.page
    }

    /// Check whether the media is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Get current playback position
    pub fn get_position(&self) -> Duration {
        self.position
    }

    /// Get media duration, `None` until metadata has loaded
    pub fn get_duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Check whether media metadata has loaded
    pub fn is_loaded(&self) -> bool {
        self.duration.is_some()
    }

    /// Get current volume level (0-100)
    pub fn get_volume(&self) -> u8 {
        self.volume.level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Asset path of the story's audio track
    pub fn audio_src(&self) -> &str {
        &self.audio_src
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain. The UI calls this
    /// after each intent or media notification to synchronize.
    pub fn drain_events(&mut self) -> Vec<StorybookEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Reset to the start of the track and attempt playback
    fn begin_playback(&mut self) {
        self.position = Duration::ZERO;
        if let Some(ref mut media) = self.media {
            media.set_position(Duration::ZERO);
        }
        self.attempt_play();
    }

    /// Ask the element to play; a rejection is swallowed
    ///
    /// The paused transport UI is the only affordance after a rejection.
    fn attempt_play(&mut self) {
        let outcome = match self.media {
            Some(ref mut media) => media.play(),
            None => Err(PlaybackError::NoMediaElement),
        };

        match outcome {
            Ok(()) => self.set_playing(true),
            Err(_) => self.set_playing(false),
        }
    }

    fn set_playing(&mut self, playing: bool) {
        if self.playing != playing {
            self.playing = playing;
            self.pending_events
                .push(StorybookEvent::PlaybackChanged { is_playing: playing });
        }
    }

    fn apply_gain(&mut self) {
        let gain = self.volume.gain();
        if let Some(ref mut media) = self.media {
            media.set_gain(gain);
        }
    }

    fn emit_page_changed(&mut self, page: Page) {
        self.pending_events.push(StorybookEvent::PageChanged { page });
    }

    fn emit_position_update(&mut self) {
        self.pending_events.push(StorybookEvent::PositionUpdate {
            position_secs: self.position.as_secs_f64(),
            duration_secs: self.duration.unwrap_or(Duration::ZERO).as_secs_f64(),
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(StorybookEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }
}

impl Default for StorybookController {
    fn default() -> Self {
        Self::new(StorybookConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::DummyMediaElement;

    fn controller_with_media(duration_secs: u64) -> StorybookController {
        let mut controller = StorybookController::default();
        controller.set_media_element(Box::new(DummyMediaElement));
        controller.handle_media_event(MediaEvent::MetadataLoaded {
            duration: Duration::from_secs(duration_secs),
        });
        controller
    }

    #[test]
    fn starts_on_cover() {
        let controller = StorybookController::default();
        assert_eq!(controller.get_page(), Page::Cover);
        assert!(!controller.is_playing());
        assert!(!controller.is_loaded());
        assert_eq!(controller.get_volume(), 70);
    }

    #[test]
    fn start_reading_enters_music_and_plays() {
        let mut controller = controller_with_media(95);

        controller.start_reading();
        assert_eq!(controller.get_page(), Page::Music);
        assert!(controller.is_playing());
        assert_eq!(controller.get_position(), Duration::ZERO);
    }

    #[test]
    fn navigation_never_skips() {
        let mut controller = controller_with_media(95);

        // Wrong-page intents are no-ops
        controller.next_page();
        controller.read_again();
        assert_eq!(controller.get_page(), Page::Cover);

        controller.start_reading();
        controller.start_reading();
        assert_eq!(controller.get_page(), Page::Music);

        controller.next_page();
        assert_eq!(controller.get_page(), Page::Final);

        controller.read_again();
        assert_eq!(controller.get_page(), Page::Cover);
    }

    #[test]
    fn leaving_music_pauses() {
        let mut controller = controller_with_media(95);

        controller.start_reading();
        assert!(controller.is_playing());

        controller.next_page();
        assert!(!controller.is_playing());
    }

    #[test]
    fn toggle_play_round_trip() {
        let mut controller = controller_with_media(95);
        controller.start_reading();

        let before = controller.is_playing();
        controller.toggle_play();
        controller.toggle_play();
        assert_eq!(controller.is_playing(), before);
    }

    #[test]
    fn toggle_play_outside_music_is_noop() {
        let mut controller = controller_with_media(95);

        controller.toggle_play();
        assert!(!controller.is_playing());
        assert_eq!(controller.get_page(), Page::Cover);
    }

    #[test]
    fn seek_is_optimistic_and_clamped() {
        let mut controller = controller_with_media(95);
        controller.start_reading();

        controller.seek(Duration::from_secs(30));
        assert_eq!(controller.get_position(), Duration::from_secs(30));

        controller.seek(Duration::from_secs(600));
        assert_eq!(controller.get_position(), Duration::from_secs(95));
    }

    #[test]
    fn ended_resets_position() {
        let mut controller = controller_with_media(95);
        controller.start_reading();
        controller.seek(Duration::from_secs(90));

        controller.handle_media_event(MediaEvent::Ended);
        assert!(!controller.is_playing());
        assert_eq!(controller.get_position(), Duration::ZERO);
    }

    #[test]
    fn deferred_autoplay_runs_on_metadata() {
        let mut controller = StorybookController::default();
        controller.set_media_element(Box::new(DummyMediaElement));

        controller.start_reading();
        assert_eq!(controller.get_page(), Page::Music);
        assert!(!controller.is_playing());

        controller.handle_media_event(MediaEvent::MetadataLoaded {
            duration: Duration::from_secs(95),
        });
        assert!(controller.is_playing());
    }

    #[test]
    fn deferred_autoplay_cancelled_by_navigation() {
        let mut controller = StorybookController::default();
        controller.set_media_element(Box::new(DummyMediaElement));

        controller.start_reading();
        controller.next_page();

        controller.handle_media_event(MediaEvent::MetadataLoaded {
            duration: Duration::from_secs(95),
        });
        assert!(!controller.is_playing());
    }

    #[test]
    fn late_confirmation_loses_to_navigation() {
        let mut controller = controller_with_media(95);
        controller.start_reading();
        controller.next_page();

        controller.confirm_playback();
        assert!(!controller.is_playing());
    }

    #[test]
    fn volume_and_mute_interplay() {
        let mut controller = controller_with_media(95);

        controller.toggle_mute();
        assert!(controller.is_muted());
        assert_eq!(controller.get_volume(), 70);

        controller.set_volume(40);
        assert!(!controller.is_muted());
        assert_eq!(controller.get_volume(), 40);
    }

    #[test]
    fn drain_events_empties_queue() {
        let mut controller = controller_with_media(95);
        controller.start_reading();

        assert!(controller.has_pending_events());
        let events = controller.drain_events();
        assert!(events.contains(&StorybookEvent::PageChanged { page: Page::Music }));
        assert!(!controller.has_pending_events());
    }
}
