use std::fmt;

use log::debug;

use crate::constants::COMPLETION_QUARTERS;

/// Completion milestones, in the order they can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Threshold {
    TwentyFive,
    Fifty,
    SeventyFive,
    OneHundred,
}

impl Threshold {
    pub const ALL: [Threshold; 4] = [
        Threshold::TwentyFive,
        Threshold::Fifty,
        Threshold::SeventyFive,
        Threshold::OneHundred,
    ];

    fn from_quarters(quarters: u8) -> Option<Self> {
        match quarters {
            1 => Some(Threshold::TwentyFive),
            2 => Some(Threshold::Fifty),
            3 => Some(Threshold::SeventyFive),
            4 => Some(Threshold::OneHundred),
            _ => None,
        }
    }

    pub fn fraction(self) -> f32 {
        match self {
            Threshold::TwentyFive => 0.25,
            Threshold::Fifty => 0.5,
            Threshold::SeventyFive => 0.75,
            Threshold::OneHundred => 1.0,
        }
    }

    pub fn event_name(self) -> &'static str {
        match self {
            Threshold::TwentyFive => "completion25",
            Threshold::Fifty => "completion50",
            Threshold::SeventyFive => "completion75",
            Threshold::OneHundred => "completion100",
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// High-water mark of how far into the story body the reader has been.
///
/// Progress is `(slide_index + 1) / content_slides`, where content slides are
/// the deck minus its trailing non-content cards. It is tracked in whole
/// quarters, so a threshold fires the first time progress reaches it and
/// never again, whichever way the reader navigates afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionTracker {
    quarters: u8,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest threshold reached so far.
    pub fn reached(&self) -> Option<Threshold> {
        Threshold::from_quarters(self.quarters)
    }

    pub fn completion(&self) -> f32 {
        self.reached().map_or(0.0, Threshold::fraction)
    }

    pub fn on_slide_change(
        &mut self,
        slide_index: usize,
        deck_length: usize,
        trailing_slides: usize,
    ) -> Option<Threshold> {
        let content_slides = deck_length.checked_sub(trailing_slides).filter(|&n| n > 0)?;

        let quarters = (slide_index + 1)
            .saturating_mul(COMPLETION_QUARTERS as usize)
            / content_slides;
        let quarters = quarters.min(COMPLETION_QUARTERS as usize) as u8;

        if quarters <= self.quarters {
            return None;
        }

        self.quarters = quarters;
        let threshold = Threshold::from_quarters(quarters);
        debug!(
            "Completion at slide {}/{}: {:?}",
            slide_index + 1,
            content_slides,
            threshold
        );
        threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn four_slide_deck_fires_one_threshold_per_step() {
        let mut tracker = CompletionTracker::new();
        let events: Vec<_> = (0..4).map(|i| tracker.on_slide_change(i, 4, 0)).collect();
        assert_eq!(
            events,
            vec![
                Some(Threshold::TwentyFive),
                Some(Threshold::Fifty),
                Some(Threshold::SeventyFive),
                Some(Threshold::OneHundred),
            ]
        );
    }

    #[test]
    fn backward_navigation_never_refires() {
        let mut tracker = CompletionTracker::new();
        for i in 0..3 {
            tracker.on_slide_change(i, 4, 0);
        }
        assert_eq!(tracker.reached(), Some(Threshold::SeventyFive));
        assert_eq!(tracker.on_slide_change(1, 4, 0), None);
        assert_eq!(tracker.on_slide_change(0, 4, 0), None);
        assert_eq!(tracker.on_slide_change(2, 4, 0), None);
        assert_eq!(tracker.on_slide_change(3, 4, 0), Some(Threshold::OneHundred));
    }

    #[test]
    fn values_between_thresholds_round_down() {
        // 10 content slides: slide 3 is 30%, slide 5 is 50%.
        let mut tracker = CompletionTracker::new();
        assert_eq!(tracker.on_slide_change(0, 10, 0), None);
        assert_eq!(tracker.on_slide_change(1, 10, 0), None);
        assert_eq!(tracker.on_slide_change(2, 10, 0), Some(Threshold::TwentyFive));
        assert_eq!(tracker.on_slide_change(3, 10, 0), None);
        assert_eq!(tracker.on_slide_change(4, 10, 0), Some(Threshold::Fifty));
    }

    #[test]
    fn jumping_ahead_fires_only_the_highest_crossed() {
        let mut tracker = CompletionTracker::new();
        assert_eq!(tracker.on_slide_change(6, 8, 0), Some(Threshold::SeventyFive));
        assert_eq!(tracker.on_slide_change(7, 8, 0), Some(Threshold::OneHundred));
    }

    #[test]
    fn trailing_slides_are_not_content() {
        let mut tracker = CompletionTracker::new();
        // 6 slides, 2 of them credits: the story body ends at index 3.
        assert_eq!(tracker.on_slide_change(3, 6, 2), Some(Threshold::OneHundred));
        assert_eq!(tracker.on_slide_change(5, 6, 2), None);
    }

    #[test]
    fn progress_past_the_story_body_is_clamped_to_one_hundred() {
        // 6/4 = 150% is clamped, so a reader who lands on the credits first
        // still reports the story as finished.
        let mut tracker = CompletionTracker::new();
        assert_eq!(tracker.on_slide_change(5, 6, 2), Some(Threshold::OneHundred));
        assert_eq!(tracker.completion(), 1.0);
    }

    #[test]
    fn deck_without_content_is_a_noop() {
        let mut tracker = CompletionTracker::new();
        assert_eq!(tracker.on_slide_change(0, 2, 2), None);
        assert_eq!(tracker.on_slide_change(0, 0, 0), None);
        assert_eq!(tracker.reached(), None);
    }

    #[test]
    fn event_names_match_analytics_wire_names() {
        let names: Vec<_> = Threshold::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["completion25", "completion50", "completion75", "completion100"]);
    }

    proptest! {
        #[test]
        fn thresholds_fire_strictly_increasing_and_once(
            len in 1usize..60,
            trailing in 0usize..4,
            walk in proptest::collection::vec(0usize..64, 1..200),
        ) {
            let mut tracker = CompletionTracker::new();
            let mut fired = Vec::new();
            for step in walk {
                if let Some(t) = tracker.on_slide_change(step % len, len, trailing) {
                    fired.push(t);
                }
            }
            prop_assert!(fired.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn reached_matches_floor_of_best_progress(
            len in 1usize..60,
            walk in proptest::collection::vec(0usize..64, 1..100),
        ) {
            let mut tracker = CompletionTracker::new();
            let mut best = 0usize;
            for step in walk {
                let index = step % len;
                best = best.max(index);
                tracker.on_slide_change(index, len, 0);
            }
            let expected = ((best + 1) as f64 / len as f64 * 4.0).floor() / 4.0;
            prop_assert!((tracker.completion() as f64 - expected).abs() < 1e-9);
        }
    }
}
