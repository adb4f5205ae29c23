//! Core types for the storybook controller

use serde::{Deserialize, Serialize};

/// Number of pages in the story
pub const PAGE_COUNT: u8 = 3;

/// One of the three discrete views of the storybook
///
/// Navigation is a fixed cycle: cover -> music -> final -> cover.
/// The music page is the only one with transport controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Book cover with the start-reading action
    Cover,

    /// Illustrated page with synchronized audio and transport controls
    Music,

    /// Closing page with credits and the read-again action
    Final,
}

impl Page {
    /// The page that follows this one in the reading cycle
    pub fn next(self) -> Page {
        match self {
            Page::Cover => Page::Music,
            Page::Music => Page::Final,
            Page::Final => Page::Cover,
        }
    }

    /// 1-based page number for the "Page N of 3" indicator
    pub fn number(self) -> u8 {
        match self {
            Page::Cover => 1,
            Page::Music => 2,
            Page::Final => 3,
        }
    }

    /// Asset path of this page's illustration
    pub fn illustration(self) -> &'static str {
        match self {
            Page::Cover => "/api/assets/cover.png",
            Page::Music => "/api/assets/music.png",
            Page::Final => "/api/assets/final.png",
        }
    }
}

/// Configuration for the storybook controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorybookConfig {
    /// Initial volume (0-100, default: 70)
    pub volume: u8,

    /// Asset path of the story's audio track (one track for the whole story)
    pub audio_src: String,
}

impl Default for StorybookConfig {
    fn default() -> Self {
        Self {
            volume: 70,
            audio_src: "/api/assets/chickery-chick.mp3".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = StorybookConfig::default();
        assert_eq!(config.volume, 70);
        assert!(config.audio_src.starts_with("/api/assets/"));
    }

    #[test]
    fn page_cycle() {
        assert_eq!(Page::Cover.next(), Page::Music);
        assert_eq!(Page::Music.next(), Page::Final);
        assert_eq!(Page::Final.next(), Page::Cover);
    }

    #[test]
    fn page_numbers() {
        assert_eq!(Page::Cover.number(), 1);
        assert_eq!(Page::Music.number(), 2);
        assert_eq!(Page::Final.number(), 3);
        assert_eq!(PAGE_COUNT, 3);
    }

    #[test]
    fn every_page_has_an_illustration() {
        for page in [Page::Cover, Page::Music, Page::Final] {
            assert!(page.illustration().ends_with(".png"));
        }
    }
}
