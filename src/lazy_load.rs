use log::debug;

use crate::asset::AssetResolver;
use crate::config::DeckConfig;
use crate::constants::LOAD_WINDOW_RADIUS;
use crate::slide::SlideElement;
use crate::viewport::Viewport;

/// Slides `slide_index - 2 ..= slide_index + 2` that exist in the deck.
pub fn select_load_window(slide_index: usize, deck_length: usize) -> Vec<usize> {
    select_load_window_with_radius(slide_index, deck_length, LOAD_WINDOW_RADIUS)
}

pub fn select_load_window_with_radius(
    slide_index: usize,
    deck_length: usize,
    radius: usize,
) -> Vec<usize> {
    let first = slide_index.saturating_sub(radius);
    let last = slide_index.saturating_add(radius).min(deck_length.saturating_sub(1));
    if deck_length == 0 || first > last {
        return Vec::new();
    }
    (first..=last).collect()
}

/// Resolves images for the slides around `slide_index`.
///
/// Backgrounds are written only when the element has none yet; inline images
/// are rewritten on every call.
pub fn load_window<R: AssetResolver>(
    elements: &mut [SlideElement],
    slide_index: usize,
    viewport: &Viewport,
    config: &DeckConfig,
    resolver: &R,
) -> Vec<usize> {
    let window = select_load_window_with_radius(slide_index, elements.len(), config.load_window_radius);
    let suffix = viewport.device_suffix(config);
    debug!("Lazy-loading slides {:?} around {} (suffix {:?})", window, slide_index, suffix);

    for &index in &window {
        load_images(&mut elements[index], suffix, config, resolver);
    }
    window
}

fn load_images<R: AssetResolver>(
    element: &mut SlideElement,
    suffix: &str,
    config: &DeckConfig,
    resolver: &R,
) {
    if let Some(asset) = &element.slide.background {
        if !element.has_background() {
            let path = resolver.resolve_background(&config.asset_root, asset, suffix);
            element.set_background(path);
        }
    }

    for i in 0..element.inline_images.len() {
        let path = resolver.resolve_inline(&config.asset_root, &element.inline_images[i].data_src);
        element.set_inline_src(i, path);
    }
}
