/// Structured failure events delivered to the telemetry collaborator.
///
/// Every variant is recoverable: events are reported and swallowed, never
/// surfaced to the caller, and never abort rendering of the rest of the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureEvent {
    /// A scroll-to-index request could not be resolved to an on-screen
    /// position.
    ScrollToIndexFailed {
        /// The requested logical index.
        index: usize,
        /// The layout bound known at the time of the request.
        measured_slots: usize,
    },
}

/// Receives failure events — typically a crash-reporting SDK.
///
/// Implementations must not panic; events are informational.
pub trait ErrorReporter {
    fn notify(&self, event: &FailureEvent);
}

/// Discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl ErrorReporter for NoopReporter {
    fn notify(&self, _event: &FailureEvent) {}
}
