//! Storybook - Page and Playback Controller
//!
//! Platform-agnostic controller for the three-page storybook web page.
//!
//! This crate provides:
//! - The page state machine (cover -> music -> final -> cover)
//! - Transport controls (play/pause, seek, volume, mute)
//! - Autoplay on entering the music page, with silent fallback to paused
//!   when the browser blocks it
//! - An event queue for UI synchronization
//! - Time formatting for the transport display
//!
//! # Architecture
//!
//! `storybook-playback` is completely platform-agnostic: the actual audio
//! element is reached through the [`MediaElement`] trait, and progress /
//! metadata / end-of-media notifications come back in as [`MediaEvent`]s.
//! The `wasm` feature adds a `wasm-bindgen` wrapper that drives a real
//! HTML `<audio>` element in the browser.
//!
//! # Example
//!
//! ```rust
//! use storybook_playback::{MediaEvent, Page, StorybookController};
//! use std::time::Duration;
//!
//! let mut controller = StorybookController::default();
//!
//! // Metadata arrives from the audio element
//! controller.handle_media_event(MediaEvent::MetadataLoaded {
//!     duration: Duration::from_secs(95),
//! });
//!
//! // Reader opens the book
//! controller.start_reading();
//! assert_eq!(controller.get_page(), Page::Music);
//!
//! // Transport controls only act on the music page
//! controller.seek(Duration::from_secs(30));
//! controller.set_volume(40);
//! controller.toggle_mute();
//!
//! // Turn past the music page: always pauses
//! controller.next_page();
//! assert!(!controller.is_playing());
//! ```

mod controller;
mod error;
pub mod events;
mod media;
pub mod time;
pub mod types;
mod volume;
pub mod wasm;

// Public exports
pub use controller::StorybookController;
pub use error::{PlaybackError, Result};
pub use events::{MediaEvent, StorybookEvent};
pub use media::MediaElement;
pub use time::format_time;
pub use types::{Page, StorybookConfig, PAGE_COUNT};
