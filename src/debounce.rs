use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Millisecond time source, injectable so timing logic can be tested.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Monotonic wall clock, counted from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock. Clones share the same time, so a test can keep one
/// handle while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Trailing-edge debounce: fires once, `interval_ms` after the last trigger.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval_ms: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    pub fn new(interval_ms: u64) -> Self {
        Self { interval_ms, deadline: None }
    }

    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms + self.interval_ms);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once per burst, when the quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
