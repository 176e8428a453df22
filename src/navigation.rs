use log::debug;

use crate::debounce::Debouncer;

/// Where the reader is in the deck, as far as the arrows care.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavState {
    Intro,  // First slide: no "previous" arrow, title-card chrome
    Middle, // Both arrows
    Outro,  // Last slide: no "next" arrow
}

impl NavState {
    /// A one-slide deck is an intro: the first-slide check wins.
    pub fn for_slide(slide_index: usize, deck_length: usize) -> Option<Self> {
        if deck_length == 0 {
            None
        } else if slide_index == 0 {
            Some(NavState::Intro)
        } else if slide_index + 1 == deck_length {
            Some(NavState::Outro)
        } else {
            Some(NavState::Middle)
        }
    }
}

/// Visibility of the navigation arrows and the one-time fade-in.
#[derive(Debug, Clone)]
pub struct ArrowChrome {
    pub state: Option<NavState>,
    pub active: bool,
    pub show_prev: bool,
    pub show_next: bool,
    pub title_card: bool,
    faded_in: bool,
    fade_in: Debouncer,
}

impl ArrowChrome {
    pub fn new(fade_debounce_ms: u64) -> Self {
        Self {
            state: None,
            active: false,
            show_prev: false,
            show_next: false,
            title_card: false,
            faded_in: false,
            fade_in: Debouncer::new(fade_debounce_ms),
        }
    }

    pub fn update(&mut self, slide_index: usize, deck_length: usize, now_ms: u64) {
        let Some(state) = NavState::for_slide(slide_index, deck_length) else {
            return;
        };

        if !self.active {
            self.active = true;
            self.fade_in.trigger(now_ms);
        }

        match state {
            NavState::Intro => {
                self.show_prev = false;
                self.show_next = true;
                self.title_card = true;
            }
            NavState::Outro => {
                self.show_prev = true;
                self.show_next = false;
            }
            NavState::Middle => {
                self.show_prev = true;
                self.show_next = true;
                self.title_card = false;
            }
        }

        if self.state != Some(state) {
            debug!("Navigation {:?} -> {:?} at slide {}", self.state, state, slide_index);
        }
        self.state = Some(state);
    }

    /// True once, when the pending fade-in completes.
    pub fn poll_fade_in(&mut self, now_ms: u64) -> bool {
        if self.fade_in.poll(now_ms) {
            self.faded_in = true;
            return true;
        }
        false
    }

    pub fn is_faded_in(&self) -> bool {
        self.faded_in
    }
}
