use crate::constants::*;
use crate::error::DeckError;

/// Deck-wide settings. Defaults come from `constants.rs`; the binary can
/// override the per-story ones from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    pub aspect_width: u32,
    pub aspect_height: u32,
    pub mobile_breakpoint: u32,
    pub mobile_suffix: String,
    pub asset_root: String,
    pub load_window_radius: usize,
    pub trailing_slides: usize,
    pub arrow_fade_debounce_ms: u64,
    pub next_post_url: Option<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            aspect_width: ASPECT_WIDTH,
            aspect_height: ASPECT_HEIGHT,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            mobile_suffix: MOBILE_SUFFIX.to_string(),
            asset_root: ASSET_ROOT.to_string(),
            load_window_radius: LOAD_WINDOW_RADIUS,
            trailing_slides: TRAILING_SLIDES,
            arrow_fade_debounce_ms: ARROW_FADE_DEBOUNCE_MS,
            next_post_url: None,
        }
    }
}

impl DeckConfig {
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.aspect_width == 0 || self.aspect_height == 0 {
            return Err(DeckError::InvalidAspectRatio {
                width: self.aspect_width,
                height: self.aspect_height,
            });
        }
        if self.mobile_breakpoint == 0 {
            return Err(DeckError::ZeroBreakpoint);
        }
        Ok(())
    }

    pub fn with_trailing_slides(mut self, trailing_slides: usize) -> Self {
        self.trailing_slides = trailing_slides;
        self
    }

    pub fn with_asset_root(mut self, asset_root: impl Into<String>) -> Self {
        self.asset_root = asset_root.into();
        self
    }

    pub fn with_next_post_url(mut self, url: impl Into<String>) -> Self {
        self.next_post_url = Some(url.into());
        self
    }
}
