use log::{debug, info};

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::asset::{AssetResolver, PathResolver};
use crate::completion::CompletionTracker;
use crate::config::DeckConfig;
use crate::constants::COPY_ACKNOWLEDGEMENT;
use crate::debounce::Clock;
use crate::error::DeckError;
use crate::lazy_load::load_window;
use crate::navigation::ArrowChrome;
use crate::slide::{Slide, SlideElement};
use crate::viewport::Viewport;

/// Keys the deck cares about. The host engine does the actual scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Escape,
    Other,
}

/// Something the controller asks the host engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideRequest {
    Next,
}

/// One reader's session with one deck: every piece of mutable state the
/// lifecycle hooks touch lives here.
pub struct DeckController<S: AnalyticsSink, C: Clock, R: AssetResolver = PathResolver> {
    config: DeckConfig,
    elements: Vec<SlideElement>,
    viewport: Viewport,
    completion: CompletionTracker,
    chrome: ArrowChrome,
    current: usize,
    slide_started_ms: u64,
    keyboard_tracked: bool,
    sink: S,
    clock: C,
    resolver: R,
}

impl<S: AnalyticsSink, C: Clock> DeckController<S, C, PathResolver> {
    pub fn new(
        config: DeckConfig,
        slides: Vec<Slide>,
        window_width: f32,
        window_height: f32,
        sink: S,
        clock: C,
    ) -> Result<Self, DeckError> {
        Self::with_resolver(config, slides, window_width, window_height, sink, clock, PathResolver)
    }
}

impl<S: AnalyticsSink, C: Clock, R: AssetResolver> DeckController<S, C, R> {
    pub fn with_resolver(
        config: DeckConfig,
        slides: Vec<Slide>,
        window_width: f32,
        window_height: f32,
        sink: S,
        clock: C,
        resolver: R,
    ) -> Result<Self, DeckError> {
        config.validate()?;
        let viewport = Viewport::new(window_width, window_height, &config);
        let chrome = ArrowChrome::new(config.arrow_fade_debounce_ms);
        let slide_started_ms = clock.now_ms();
        Ok(Self {
            elements: slides.into_iter().map(SlideElement::new).collect(),
            config,
            viewport,
            completion: CompletionTracker::new(),
            chrome,
            current: 0,
            slide_started_ms,
            keyboard_tracked: false,
            sink,
            clock,
            resolver,
        })
    }

    /// First render: resolve images around slide 0 and show the arrows.
    pub fn on_ready(&mut self) {
        info!("Deck ready with {} slides", self.elements.len());
        self.load_window(0);
        self.chrome.update(0, self.elements.len(), self.clock.now_ms());
    }

    /// A transition to `slide_index` has been committed by the host.
    pub fn on_slide_change(&mut self, slide_index: usize) {
        let deck_length = self.elements.len();
        if slide_index >= deck_length {
            debug!("Ignoring change to slide {} of {}", slide_index, deck_length);
            return;
        }
        self.current = slide_index;
        self.load_window(slide_index);

        let now = self.clock.now_ms();
        self.chrome.update(slide_index, deck_length, now);
        self.slide_started_ms = now;

        if let Some(threshold) =
            self.completion
                .on_slide_change(slide_index, deck_length, self.config.trailing_slides)
        {
            self.sink.track(AnalyticsEvent::Completion(threshold));
        }
    }

    /// The host is about to leave `previous_index` after `elapsed_ms` on it.
    pub fn on_slide_leave(&mut self, previous_index: usize, elapsed_ms: u64) {
        self.sink.track(AnalyticsEvent::ExitSlide { index: previous_index, elapsed_ms });
    }

    /// Convenience for hosts that do their own transitions: leave the
    /// current slide, then commit the change.
    pub fn go_to(&mut self, slide_index: usize) {
        if slide_index >= self.elements.len() || slide_index == self.current {
            return;
        }
        let elapsed = self.slide_elapsed_ms();
        self.on_slide_leave(self.current, elapsed);
        self.on_slide_change(slide_index);
    }

    pub fn next(&mut self) {
        self.go_to(self.current + 1);
    }

    pub fn prev(&mut self) {
        if let Some(index) = self.current.checked_sub(1) {
            self.go_to(index);
        }
    }

    pub fn slide_elapsed_ms(&self) -> u64 {
        self.clock.now_ms().saturating_sub(self.slide_started_ms)
    }

    pub fn on_resize(&mut self, window_width: f32, window_height: f32) {
        self.viewport = Viewport::new(window_width, window_height, &self.config);
        debug!(
            "Resized to {}x{}, content box {}x{}",
            window_width, window_height, self.viewport.content.width, self.viewport.content.height
        );
    }

    /// Records the first arrow-key navigation of the session. The key is
    /// never consumed; the host still handles the scroll.
    pub fn on_key(&mut self, key: Key) {
        if self.keyboard_tracked {
            return;
        }
        if matches!(key, Key::Left | Key::Right) {
            self.keyboard_tracked = true;
            self.sink.track(AnalyticsEvent::KeyboardNavUsed);
        }
    }

    /// Tapping a slide on a touch device advances the deck.
    pub fn on_slide_click(&mut self, is_touch: bool) -> Option<SlideRequest> {
        is_touch.then_some(SlideRequest::Next)
    }

    /// The clipboard plugin reported a successful copy. Returns the text to
    /// show the reader.
    pub fn on_copy(&mut self) -> &'static str {
        self.sink.track(AnalyticsEvent::CopySummary);
        COPY_ACKNOWLEDGEMENT
    }

    /// Returns where the host should navigate, if a next post is configured.
    pub fn on_next_post(&mut self) -> Option<&str> {
        self.sink.track(AnalyticsEvent::NextPostClicked);
        self.config.next_post_url.as_deref()
    }

    /// Drives the arrow fade-in; true on the tick it completes.
    pub fn tick(&mut self) -> bool {
        self.chrome.poll_fade_in(self.clock.now_ms())
    }

    fn load_window(&mut self, slide_index: usize) {
        load_window(&mut self.elements, slide_index, &self.viewport, &self.config, &self.resolver);
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[SlideElement] {
        &self.elements
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn chrome(&self) -> &ArrowChrome {
        &self.chrome
    }

    pub fn completion(&self) -> &CompletionTracker {
        &self.completion
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingSink;
    use crate::completion::Threshold;
    use crate::debounce::ManualClock;

    fn slides(len: usize) -> Vec<Slide> {
        (0..len)
            .map(|i| Slide::new().with_background_ref(&format!("s{}.jpg", i)))
            .collect()
    }

    fn controller(len: usize) -> (DeckController<RecordingSink, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let deck = DeckController::new(
            DeckConfig::default(),
            slides(len),
            1440.0,
            900.0,
            RecordingSink::new(),
            clock.clone(),
        )
        .unwrap();
        (deck, clock)
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = DeckConfig { aspect_width: 0, ..DeckConfig::default() };
        let result = DeckController::new(config, slides(3), 800.0, 600.0, RecordingSink::new(), ManualClock::new());
        assert!(matches!(result, Err(DeckError::InvalidAspectRatio { .. })));
    }

    #[test]
    fn ready_loads_first_window_and_enters_intro() {
        let (mut deck, _) = controller(6);
        deck.on_ready();
        let loaded: Vec<bool> = deck.elements().iter().map(SlideElement::has_background).collect();
        assert_eq!(loaded, [true, true, true, false, false, false]);
        assert!(!deck.chrome().show_prev);
        assert!(deck.sink().events.is_empty());
    }

    #[test]
    fn slide_change_emits_completion() {
        let (mut deck, _) = controller(4);
        deck.on_ready();
        deck.on_slide_change(1);
        assert_eq!(deck.sink().events, [AnalyticsEvent::Completion(Threshold::Fifty)]);
    }

    #[test]
    fn go_to_reports_dwell_time_of_the_slide_left() {
        let (mut deck, clock) = controller(8);
        deck.on_ready();
        clock.advance(1500);
        deck.next();
        clock.advance(300);
        deck.next();
        let exits: Vec<_> = deck
            .sink()
            .events
            .iter()
            .filter(|e| matches!(e, AnalyticsEvent::ExitSlide { .. }))
            .cloned()
            .collect();
        assert_eq!(
            exits,
            [
                AnalyticsEvent::ExitSlide { index: 0, elapsed_ms: 1500 },
                AnalyticsEvent::ExitSlide { index: 1, elapsed_ms: 300 },
            ]
        );
    }

    #[test]
    fn keyboard_navigation_is_tracked_once() {
        let (mut deck, _) = controller(3);
        deck.on_key(Key::Escape);
        deck.on_key(Key::Right);
        deck.on_key(Key::Left);
        assert_eq!(deck.sink().count(&AnalyticsEvent::KeyboardNavUsed), 1);
    }

    #[test]
    fn tap_advances_only_on_touch() {
        let (mut deck, _) = controller(3);
        assert_eq!(deck.on_slide_click(true), Some(SlideRequest::Next));
        assert_eq!(deck.on_slide_click(false), None);
    }

    #[test]
    fn every_copy_is_acknowledged_and_tracked() {
        let (mut deck, _) = controller(3);
        assert_eq!(deck.on_copy(), "Copied to your clipboard!");
        deck.on_copy();
        assert_eq!(deck.sink().count(&AnalyticsEvent::CopySummary), 2);
    }

    #[test]
    fn next_post_returns_configured_url() {
        let clock = ManualClock::new();
        let config = DeckConfig::default().with_next_post_url("https://example.org/next");
        let mut deck =
            DeckController::new(config, slides(2), 1024.0, 768.0, RecordingSink::new(), clock).unwrap();
        assert_eq!(deck.on_next_post(), Some("https://example.org/next"));
        assert_eq!(deck.sink().names(), ["nextPostClicked"]);
    }

    #[test]
    fn resize_switches_asset_variant_for_newly_loaded_slides() {
        let (mut deck, _) = controller(10);
        deck.on_ready();
        deck.on_resize(375.0, 667.0);
        deck.on_slide_change(5);
        assert_eq!(deck.elements()[0].background(), Some("assets/s0.jpg"));
        assert_eq!(deck.elements()[7].background(), Some("assets/s7-sq.jpg"));
    }

    #[test]
    fn arrow_fade_in_waits_for_the_clock() {
        let (mut deck, clock) = controller(3);
        deck.on_ready();
        assert!(!deck.tick());
        clock.advance(1);
        assert!(deck.tick());
        assert!(!deck.tick());
    }

    #[test]
    fn out_of_range_change_is_ignored() {
        let (mut deck, _) = controller(3);
        deck.on_ready();
        deck.on_slide_change(7);
        assert_eq!(deck.current(), 0);
        assert!(deck.sink().events.is_empty());
    }

    #[test]
    fn empty_deck_is_inert() {
        let (mut deck, _) = controller(0);
        deck.on_ready();
        deck.on_slide_change(0);
        deck.next();
        assert!(deck.is_empty());
        assert!(deck.chrome().state.is_none());
        assert!(deck.sink().events.is_empty());
    }
}
