use log::warn;

use crate::asset::AssetReference;

/// One section of the story: an optional full-bleed background and any
/// number of inline images that are only resolved near the viewport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slide {
    pub background: Option<AssetReference>,
    pub inline_images: Vec<String>,
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, asset: AssetReference) -> Self {
        self.background = Some(asset);
        self
    }

    /// Parses `reference`; a malformed one leaves the slide without a
    /// background rather than failing the deck.
    pub fn with_background_ref(mut self, reference: &str) -> Self {
        match reference.parse() {
            Ok(asset) => self.background = Some(asset),
            Err(e) => warn!("Skipping background: {}", e),
        }
        self
    }

    pub fn with_inline_image(mut self, filename: impl Into<String>) -> Self {
        self.inline_images.push(filename.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub data_src: String,
    pub src: Option<String>,
}

/// Render-side state of a slide: what the host currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideElement {
    pub slide: Slide,
    background: Option<String>,
    pub inline_images: Vec<InlineImage>,

    background_writes: usize,
    inline_writes: usize,
}

impl SlideElement {
    pub fn new(slide: Slide) -> Self {
        let inline_images = slide
            .inline_images
            .iter()
            .map(|data_src| InlineImage { data_src: data_src.clone(), src: None })
            .collect();
        Self {
            slide,
            background: None,
            inline_images,
            background_writes: 0,
            inline_writes: 0,
        }
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn has_background(&self) -> bool {
        self.background.as_deref().is_some_and(|path| !path.is_empty())
    }

    pub fn set_background(&mut self, path: String) {
        self.background = Some(path);
        self.background_writes += 1;
    }

    pub fn set_inline_src(&mut self, index: usize, path: String) {
        if let Some(image) = self.inline_images.get_mut(index) {
            image.src = Some(path);
            self.inline_writes += 1;
        }
    }

    pub fn background_writes(&self) -> usize {
        self.background_writes
    }

    pub fn inline_writes(&self) -> usize {
        self.inline_writes
    }
}
