//! WASM bindings for storybook-playback
//!
//! This module provides WebAssembly bindings for the StorybookController,
//! allowing the page/playback state machine to drive a real HTML audio
//! element in the browser.

#[cfg(feature = "wasm")]
pub mod element;

#[cfg(feature = "wasm")]
pub mod controller;

#[cfg(feature = "wasm")]
pub use controller::WasmStorybookController;

#[cfg(feature = "wasm")]
pub use element::DomMediaElement;
