//! WASM-compatible StorybookController wrapper

use super::element::DomMediaElement;
use crate::events::{MediaEvent, StorybookEvent};
use crate::time::format_time;
use crate::types::{Page, StorybookConfig};
use crate::StorybookController;
use js_sys::Function;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// WASM-compatible storybook controller
///
/// This wraps the core StorybookController with a JavaScript-friendly
/// API. The host page attaches the `<audio>` element once, forwards its
/// `timeupdate` / `loadedmetadata` / `ended` events and the play-promise
/// outcome, and registers callbacks for state it wants to render.
#[wasm_bindgen]
pub struct WasmStorybookController {
    inner: StorybookController,

    // Event callbacks
    on_page_change: Option<Function>,
    on_playback_change: Option<Function>,
    on_position_change: Option<Function>,
    on_volume_change: Option<Function>,
}

#[wasm_bindgen]
impl WasmStorybookController {
    /// Create a new controller on the cover page
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        Self {
            inner: StorybookController::new(StorybookConfig::default()),
            on_page_change: None,
            on_playback_change: None,
            on_position_change: None,
            on_volume_change: None,
        }
    }

    /// Attach the page's audio element
    #[wasm_bindgen(js_name = attachAudioElement)]
    pub fn attach_audio_element(&mut self, element: HtmlAudioElement) {
        self.inner
            .set_media_element(Box::new(DomMediaElement::new(element)));
    }

    // ===== Navigation =====

    /// Start reading (cover -> music)
    #[wasm_bindgen(js_name = startReading)]
    pub fn start_reading(&mut self) {
        self.inner.start_reading();
        self.dispatch_events();
    }

    /// Turn to the final page (music -> final)
    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) {
        self.inner.next_page();
        self.dispatch_events();
    }

    /// Read again (final -> cover)
    #[wasm_bindgen(js_name = readAgain)]
    pub fn read_again(&mut self) {
        self.inner.read_again();
        self.dispatch_events();
    }

    // ===== Transport =====

    /// Toggle play/pause on the music page
    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.inner.toggle_play();
        self.dispatch_events();
    }

    /// Seek to a position in seconds
    #[wasm_bindgen(js_name = seekTo)]
    pub fn seek_to(&mut self, position_secs: f64) {
        self.inner
            .seek(Duration::from_secs_f64(position_secs.max(0.0)));
        self.dispatch_events();
    }

    /// Set volume (0-100)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: u8) {
        self.inner.set_volume(level.min(100));
        self.dispatch_events();
    }

    /// Toggle mute
    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&mut self) {
        self.inner.toggle_mute();
        self.dispatch_events();
    }

    // ===== Media element notifications =====

    /// Forward a `timeupdate` event
    #[wasm_bindgen(js_name = notifyTimeUpdate)]
    pub fn notify_time_update(&mut self, position_secs: f64) {
        self.inner.handle_media_event(MediaEvent::TimeUpdate {
            position: Duration::from_secs_f64(position_secs.max(0.0)),
        });
        self.dispatch_events();
    }

    /// Forward a `loadedmetadata` event
    #[wasm_bindgen(js_name = notifyMetadataLoaded)]
    pub fn notify_metadata_loaded(&mut self, duration_secs: f64) {
        self.inner.handle_media_event(MediaEvent::MetadataLoaded {
            duration: Duration::from_secs_f64(duration_secs.max(0.0)),
        });
        self.dispatch_events();
    }

    /// Forward an `ended` event
    #[wasm_bindgen(js_name = notifyEnded)]
    pub fn notify_ended(&mut self) {
        self.inner.handle_media_event(MediaEvent::Ended);
        self.dispatch_events();
    }

    /// Forward a resolved play promise
    #[wasm_bindgen(js_name = notifyPlaybackConfirmed)]
    pub fn notify_playback_confirmed(&mut self) {
        self.inner.confirm_playback();
        self.dispatch_events();
    }

    /// Forward a rejected play promise
    #[wasm_bindgen(js_name = notifyPlaybackBlocked)]
    pub fn notify_playback_blocked(&mut self) {
        self.inner.playback_rejected();
        self.dispatch_events();
    }

    // ===== State queries =====

    /// Get the current page as string ("cover" | "music" | "final")
    #[wasm_bindgen(js_name = getPage)]
    pub fn get_page(&self) -> String {
        match self.inner.get_page() {
            Page::Cover => "cover".to_string(),
            Page::Music => "music".to_string(),
            Page::Final => "final".to_string(),
        }
    }

    /// 1-based number of the current page
    #[wasm_bindgen(js_name = getPageNumber)]
    pub fn get_page_number(&self) -> u8 {
        self.inner.get_page().number()
    }

    /// Asset path of the current page's illustration
    #[wasm_bindgen(js_name = getIllustration)]
    pub fn get_illustration(&self) -> String {
        self.inner.get_page().illustration().to_string()
    }

    /// Asset path of the story's audio track
    #[wasm_bindgen(js_name = getAudioSrc)]
    pub fn get_audio_src(&self) -> String {
        self.inner.audio_src().to_string()
    }

    /// Check whether the media is playing
    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    /// Get current position in seconds
    #[wasm_bindgen(js_name = getPosition)]
    pub fn get_position(&self) -> f64 {
        self.inner.get_position().as_secs_f64()
    }

    /// Get duration in seconds, if metadata has loaded
    #[wasm_bindgen(js_name = getDuration)]
    pub fn get_duration(&self) -> Option<f64> {
        self.inner.get_duration().map(|d| d.as_secs_f64())
    }

    /// Check whether media metadata has loaded
    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    /// Get current volume (0-100)
    #[wasm_bindgen(js_name = getVolume)]
    pub fn get_volume(&self) -> u8 {
        self.inner.get_volume()
    }

    /// Check if muted
    #[wasm_bindgen(js_name = isMuted)]
    pub fn is_muted(&self) -> bool {
        self.inner.is_muted()
    }

    /// Format a time in seconds as `minutes:seconds` for the transport
    #[wasm_bindgen(js_name = formatTime)]
    pub fn format_time(&self, seconds: f64) -> String {
        format_time(seconds)
    }

    // ===== Event listeners =====

    /// Register page change callback: `(page: string) => void`
    #[wasm_bindgen(js_name = onPageChange)]
    pub fn on_page_change(&mut self, callback: Function) {
        self.on_page_change = Some(callback);
    }

    /// Register playback change callback: `(isPlaying: boolean) => void`
    #[wasm_bindgen(js_name = onPlaybackChange)]
    pub fn on_playback_change(&mut self, callback: Function) {
        self.on_playback_change = Some(callback);
    }

    /// Register position callback: `(positionSecs, durationSecs) => void`
    #[wasm_bindgen(js_name = onPositionChange)]
    pub fn on_position_change(&mut self, callback: Function) {
        self.on_position_change = Some(callback);
    }

    /// Register volume callback: `(level: number, isMuted: boolean) => void`
    #[wasm_bindgen(js_name = onVolumeChange)]
    pub fn on_volume_change(&mut self, callback: Function) {
        self.on_volume_change = Some(callback);
    }

    // ===== Internal event dispatch =====

    fn dispatch_events(&mut self) {
        for event in self.inner.drain_events() {
            match event {
                StorybookEvent::PageChanged { page } => {
                    if let Some(ref cb) = self.on_page_change {
                        let name = match page {
                            Page::Cover => "cover",
                            Page::Music => "music",
                            Page::Final => "final",
                        };
                        cb.call1(&JsValue::NULL, &JsValue::from_str(name)).ok();
                    }
                }
                StorybookEvent::PlaybackChanged { is_playing } => {
                    if let Some(ref cb) = self.on_playback_change {
                        cb.call1(&JsValue::NULL, &JsValue::from_bool(is_playing))
                            .ok();
                    }
                }
                StorybookEvent::PositionUpdate {
                    position_secs,
                    duration_secs,
                } => {
                    if let Some(ref cb) = self.on_position_change {
                        cb.call2(
                            &JsValue::NULL,
                            &JsValue::from_f64(position_secs),
                            &JsValue::from_f64(duration_secs),
                        )
                        .ok();
                    }
                }
                StorybookEvent::MediaLoaded { duration_secs } => {
                    if let Some(ref cb) = self.on_position_change {
                        cb.call2(
                            &JsValue::NULL,
                            &JsValue::from_f64(self.inner.get_position().as_secs_f64()),
                            &JsValue::from_f64(duration_secs),
                        )
                        .ok();
                    }
                }
                StorybookEvent::VolumeChanged { level, is_muted } => {
                    if let Some(ref cb) = self.on_volume_change {
                        cb.call2(
                            &JsValue::NULL,
                            &JsValue::from_f64(f64::from(level)),
                            &JsValue::from_bool(is_muted),
                        )
                        .ok();
                    }
                }
                StorybookEvent::PlaybackEnded => {
                    if let Some(ref cb) = self.on_position_change {
                        cb.call2(
                            &JsValue::NULL,
                            &JsValue::from_f64(0.0),
                            &JsValue::from_f64(
                                self.inner
                                    .get_duration()
                                    .map_or(0.0, |d| d.as_secs_f64()),
                            ),
                        )
                        .ok();
                    }
                }
            }
        }
    }
}

impl Default for WasmStorybookController {
    fn default() -> Self {
        Self::new()
    }
}
