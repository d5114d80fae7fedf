//! Clamps a recording to the requested analysis interval.

use crate::io::loader::Recording;

/// The requested analysis interval and what it clamped to.
///
/// `effective_seconds` never exceeds `requested_seconds`, and equals the
/// recording duration whenever the request runs past the end of the
/// recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisWindow {
    pub requested_seconds: f64,
    pub effective_seconds: f64,
}

/// Truncates `recording` to the samples before `requested_seconds`.
///
/// The boundary is the first sample whose time reaches the request; the
/// truncation keeps everything strictly before it. A forward scan is
/// used on purpose: it makes no assumption about a uniform sampling
/// rate, and recordings are single strips, not streams.
///
/// A request beyond the recording length keeps the whole recording; a
/// zero request yields an empty window, which downstream stages report
/// as an undefined metric.
pub fn clamp(recording: &Recording, requested_seconds: f64) -> (Recording, AnalysisWindow) {
    let boundary = recording
        .times
        .iter()
        .position(|&t| t >= requested_seconds)
        .unwrap_or(recording.len());

    let effective_seconds = match recording.times.last() {
        Some(&last) => requested_seconds.min(last),
        None => 0.0,
    };

    let clamped = Recording {
        times: recording.times[..boundary].to_vec(),
        voltages: recording.voltages[..boundary].to_vec(),
    };
    let window = AnalysisWindow {
        requested_seconds,
        effective_seconds,
    };
    (clamped, window)
}
