//! Decision logic for a full-screen, slide-by-slide story deck.
//!
//! The host navigation engine owns scrolling, input and drawing; it calls
//! into a [`DeckController`] on its lifecycle hooks, and the controller
//! decides which images to resolve, which arrows to show and which
//! analytics events to emit.

pub mod analytics;
pub mod asset;
pub mod completion;
pub mod config;
pub mod constants;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod lazy_load;
pub mod navigation;
pub mod simulate;
pub mod slide;
pub mod viewport;

pub use crate::analytics::{AnalyticsEvent, AnalyticsSink, LogSink, RecordingSink};
pub use crate::asset::{AssetReference, AssetResolver, PathResolver};
pub use crate::completion::{CompletionTracker, Threshold};
pub use crate::config::DeckConfig;
pub use crate::controller::{DeckController, Key, SlideRequest};
pub use crate::debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use crate::error::DeckError;
pub use crate::lazy_load::{load_window, select_load_window};
pub use crate::navigation::{ArrowChrome, NavState};
pub use crate::simulate::Simulation;
pub use crate::slide::{InlineImage, Slide, SlideElement};
pub use crate::viewport::{compute_viewport, ContentBox, Viewport};
