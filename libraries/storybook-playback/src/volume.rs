//! Volume control for the media element
//!
//! Volume is a 0-100% level plus an independent mute flag. The effective
//! output level applied to the element is zero while muted and the stored
//! level otherwise; muting never overwrites the stored level.

/// Volume controller
///
/// The gain is linear (`level / 100`): the browser media element owns the
/// output curve, so no perceptual scaling happens here.
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100, default: 70)
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (0-100)
    ///
    /// A non-zero level also clears mute, mirroring the volume slider:
    /// dragging it up while muted is an unmute gesture.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        if self.level > 0 {
            self.muted = false;
        }
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Effective gain to apply to the media element
    ///
    /// Returns 0.0 if muted, otherwise the linear level
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            f32::from(self.level) / 100.0
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(70)
    }
}
