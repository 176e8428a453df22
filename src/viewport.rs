use crate::config::DeckConfig;

/// Size of the 16:9 box slide content is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBox {
    pub width: f32,
    pub height: f32,
}

/// Current window size and the content box derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub content: ContentBox,
}

impl Viewport {
    pub fn new(width: f32, height: f32, config: &DeckConfig) -> Self {
        let content = compute_viewport_with_ratio(
            width,
            height,
            config.aspect_width as f32,
            config.aspect_height as f32,
        );
        Self { width, height, content }
    }

    pub fn is_mobile(&self, config: &DeckConfig) -> bool {
        self.width < config.mobile_breakpoint as f32
    }

    /// Filename modifier for this viewport: the mobile suffix below the
    /// breakpoint, empty otherwise.
    pub fn device_suffix<'a>(&self, config: &'a DeckConfig) -> &'a str {
        if self.is_mobile(config) { &config.mobile_suffix } else { "" }
    }
}

pub fn compute_viewport(window_width: f32, window_height: f32) -> ContentBox {
    use crate::constants::{ASPECT_HEIGHT, ASPECT_WIDTH};
    compute_viewport_with_ratio(
        window_width,
        window_height,
        ASPECT_WIDTH as f32,
        ASPECT_HEIGHT as f32,
    )
}

// One side always matches the window; the other overflows it to keep the ratio.
fn compute_viewport_with_ratio(
    window_width: f32,
    window_height: f32,
    aspect_width: f32,
    aspect_height: f32,
) -> ContentBox {
    let optimal_width = (window_height * aspect_width) / aspect_height;
    let optimal_height = (window_width * aspect_height) / aspect_width;

    if optimal_width > window_width {
        ContentBox { width: optimal_width, height: window_height }
    } else {
        ContentBox { width: window_width, height: optimal_height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wide_window_keeps_width() {
        let content = compute_viewport(1920.0, 1000.0);
        assert_eq!(content, ContentBox { width: 1920.0, height: 1080.0 });
    }

    #[test]
    fn tall_window_keeps_height() {
        let content = compute_viewport(768.0, 1024.0);
        assert_eq!(content.height, 1024.0);
        assert!((content.width - 1820.4445).abs() < 0.01);
    }

    #[test]
    fn exact_ratio_is_unchanged() {
        assert_eq!(
            compute_viewport(1280.0, 720.0),
            ContentBox { width: 1280.0, height: 720.0 }
        );
    }

    #[test]
    fn default_config_and_free_function_agree() {
        let config = DeckConfig::default();
        for (w, h) in [(1920.0, 1000.0), (768.0, 1024.0), (1280.0, 720.0)] {
            assert_eq!(Viewport::new(w, h, &config).content, compute_viewport(w, h));
        }
    }

    #[test]
    fn suffix_boundary_is_mobile_below_769() {
        let config = DeckConfig::default();
        assert_eq!(Viewport::new(768.0, 1024.0, &config).device_suffix(&config), "-sq");
        assert_eq!(Viewport::new(769.0, 1024.0, &config).device_suffix(&config), "");
        assert_eq!(Viewport::new(1440.0, 900.0, &config).device_suffix(&config), "");
    }

    proptest! {
        #[test]
        fn content_box_keeps_ratio_and_covers_window(w in 1.0f32..8000.0, h in 1.0f32..8000.0) {
            let content = compute_viewport(w, h);
            let ratio = content.width / content.height;
            prop_assert!((ratio - 16.0 / 9.0).abs() < 1e-3);
            prop_assert!(content.width >= w - 1e-2);
            prop_assert!(content.height >= h - 1e-2);
            // Smallest such box: one side matches the window exactly.
            prop_assert!(content.width == w || content.height == h);
        }
    }
}
