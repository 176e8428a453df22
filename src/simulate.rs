use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analytics::AnalyticsSink;
use crate::config::DeckConfig;
use crate::controller::{DeckController, Key};
use crate::debounce::ManualClock;
use crate::error::DeckError;
use crate::slide::Slide;

/// Headless reader for exercising a deck without a window.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub steps: usize,
    pub seed: u64,
    pub forward_bias: f64,             // Chance that a step moves forward
    pub keyboard_chance: f64,          // Chance that a step is taken with the arrow keys
    pub dwell_ms: std::ops::Range<u64>,
    pub window: (f32, f32),
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            steps: 50,
            seed: 0,
            forward_bias: 0.8,
            keyboard_chance: 0.3,
            dwell_ms: 500..8000,
            window: (1440.0, 900.0),
        }
    }
}

impl Simulation {
    /// Walks the deck and returns the controller so the caller can inspect
    /// the final session state.
    pub fn run<S: AnalyticsSink>(
        &self,
        config: DeckConfig,
        slides: Vec<Slide>,
        sink: S,
    ) -> Result<DeckController<S, ManualClock>, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let clock = ManualClock::new();
        let (width, height) = self.window;
        let mut deck = DeckController::new(config, slides, width, height, sink, clock.clone())?;
        deck.on_ready();

        for step in 0..self.steps {
            clock.advance(rng.random_range(self.dwell_ms.clone()));
            deck.tick();

            let forward = rng.random_bool(self.forward_bias);
            if rng.random_bool(self.keyboard_chance) {
                deck.on_key(if forward { Key::Right } else { Key::Left });
            }

            if forward {
                deck.next();
            } else {
                deck.prev();
            }
            debug!("Step {}: at slide {}", step, deck.current());

            if deck.current() + 1 == deck.len() && rng.random_bool(0.5) {
                break;
            }
        }

        Ok(deck)
    }
}
