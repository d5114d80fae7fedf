//! Structured pipeline events.
//!
//! The core never configures logging itself. Callers inject an
//! [`AnalysisObserver`] and decide what to do with the events; the
//! bundled [`LogObserver`] forwards them to the `log` facade.

/// One event per completed (or rejected) pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisEvent {
    /// Validation rejected a parameter before any work ran.
    ParameterRejected { name: &'static str },
    /// The sample loader produced a recording.
    RecordingLoaded { samples: usize },
    /// The analysis window was clamped to the recording.
    WindowClamped {
        requested_seconds: f64,
        effective_seconds: f64,
    },
    /// The DC offset was removed from the voltage sequence.
    BaselineRemoved { mean_voltage: f64 },
    /// The autocorrelation profile was computed.
    ProfileComputed { lags: usize },
    /// Peak detection finished.
    BeatsDetected { count: usize },
}

/// Receiver for [`AnalysisEvent`]s emitted by the pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisObserver {
    fn on_event(&self, event: &AnalysisEvent);
}

/// Discards all events.
pub struct NullObserver;

impl AnalysisObserver for NullObserver {
    fn on_event(&self, _event: &AnalysisEvent) {}
}

/// Forwards events to `log::debug!`.
pub struct LogObserver;

impl AnalysisObserver for LogObserver {
    fn on_event(&self, event: &AnalysisEvent) {
        log::debug!("{event:?}");
    }
}
