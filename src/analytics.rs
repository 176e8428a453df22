use std::fmt;

use log::info;

use crate::completion::Threshold;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    Completion(Threshold),
    ExitSlide { index: usize, elapsed_ms: u64 },
    KeyboardNavUsed,
    CopySummary,
    NextPostClicked,
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::Completion(threshold) => threshold.event_name(),
            AnalyticsEvent::ExitSlide { .. } => "exitSlide",
            AnalyticsEvent::KeyboardNavUsed => "keyboardNavUsed",
            AnalyticsEvent::CopySummary => "copySummary",
            AnalyticsEvent::NextPostClicked => "nextPostClicked",
        }
    }
}

impl fmt::Display for AnalyticsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsEvent::ExitSlide { index, elapsed_ms } => {
                write!(f, "{}({}, {}ms)", self.name(), index, elapsed_ms)
            }
            _ => f.write_str(self.name()),
        }
    }
}

pub trait AnalyticsSink {
    fn track(&mut self, event: AnalyticsEvent);
}

/// Sends every event to the `log` facade under the `analytics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn track(&mut self, event: AnalyticsEvent) {
        info!(target: "analytics", "{}", event);
    }
}

/// Keeps events in memory, in emission order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<AnalyticsEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.iter().map(AnalyticsEvent::name).collect()
    }

    pub fn count(&self, event: &AnalyticsEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl AnalyticsSink for RecordingSink {
    fn track(&mut self, event: AnalyticsEvent) {
        self.events.push(event);
    }
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for &mut S {
    fn track(&mut self, event: AnalyticsEvent) {
        (**self).track(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_event_formats_index_and_dwell() {
        let event = AnalyticsEvent::ExitSlide { index: 3, elapsed_ms: 4200 };
        assert_eq!(event.to_string(), "exitSlide(3, 4200ms)");
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.track(AnalyticsEvent::KeyboardNavUsed);
        sink.track(AnalyticsEvent::Completion(Threshold::TwentyFive));
        sink.track(AnalyticsEvent::NextPostClicked);
        assert_eq!(sink.names(), ["keyboardNavUsed", "completion25", "nextPostClicked"]);
    }
}
