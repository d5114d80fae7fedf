//! Heart-rate metrics from single-lead ECG recordings.
//!
//! This crate ingests a time/voltage recording and derives mean heart
//! rate, beat timestamps, voltage extremes, duration, and beat count
//! over a requested analysis window. The pipeline clamps the recording
//! to the window, removes the DC offset, computes a normalized
//! autocorrelation profile, and detects the profile's periodicity peaks
//! as beats.
//!
//! ```no_run
//! use ecg_hrm::{analyze, AnalysisConfig};
//!
//! let config = AnalysisConfig::new(60.0);
//! let metrics = analyze("strip.csv".as_ref(), &config)?;
//! println!("mean HR: {:.1} BPM over {} beats", metrics.mean_hr_bpm, metrics.num_beats);
//! # Ok::<(), ecg_hrm::HrmError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod observer;
pub mod preprocessing;

use std::path::{Path, PathBuf};

pub use analysis::metrics::Metrics;
pub use analysis::peaks::{PeakFinder, ThresholdPeakFinder};
pub use config::{AnalysisConfig, DetectionParameters};
pub use error::HrmError;
pub use observer::{AnalysisEvent, AnalysisObserver, LogObserver, NullObserver};
pub use preprocessing::window::AnalysisWindow;

/// Runs the full pipeline on the recording at `path`.
///
/// Parameter validation happens before any file I/O, so a bad
/// configuration never triggers partial work. The computation is pure:
/// repeated calls with the same inputs yield identical metrics.
///
/// # Errors
///
/// See [`HrmError`]; validation failures surface as
/// [`HrmError::InvalidArgument`] or [`HrmError::OutOfRange`], a missing
/// file as [`HrmError::SourceNotFound`], and recordings on which the
/// metrics are mathematically undefined (fewer than two detected beats,
/// zero-variance voltage) as [`HrmError::UndefinedMetric`].
pub fn analyze(path: &Path, config: &AnalysisConfig) -> Result<Metrics, HrmError> {
    analyze_with_observer(path, config, &NullObserver)
}

/// As [`analyze`], emitting one [`AnalysisEvent`] per pipeline stage.
pub fn analyze_with_observer(
    path: &Path,
    config: &AnalysisConfig,
    observer: &dyn AnalysisObserver,
) -> Result<Metrics, HrmError> {
    let params = config.validate().inspect_err(|e| {
        if let HrmError::InvalidArgument { name } | HrmError::OutOfRange { name, .. } = *e {
            observer.on_event(&AnalysisEvent::ParameterRejected { name });
        }
    })?;

    let recording = io::loader::load_recording(path)?;
    observer.on_event(&AnalysisEvent::RecordingLoaded {
        samples: recording.len(),
    });

    let (recording, window) = preprocessing::window::clamp(&recording, config.requested_seconds);
    observer.on_event(&AnalysisEvent::WindowClamped {
        requested_seconds: window.requested_seconds,
        effective_seconds: window.effective_seconds,
    });

    let mean = preprocessing::baseline::mean_voltage(&recording.voltages);
    let voltages = preprocessing::baseline::remove_mean(&recording.voltages);
    observer.on_event(&AnalysisEvent::BaselineRemoved { mean_voltage: mean });

    let profile = analysis::autocorrelation::correlation_profile(&voltages)?;
    observer.on_event(&AnalysisEvent::ProfileComputed {
        lags: profile.len(),
    });

    let peaks = ThresholdPeakFinder.find_peaks(&profile, params.sensitivity, params.min_spacing);
    observer.on_event(&AnalysisEvent::BeatsDetected { count: peaks.len() });

    analysis::metrics::compute(&recording.times, &voltages, &peaks)
}

/// Runs the pipeline and writes the JSON report next to the recording.
///
/// Returns the metrics and the path of the written report.
pub fn analyze_and_report(
    path: &Path,
    config: &AnalysisConfig,
) -> Result<(Metrics, PathBuf), HrmError> {
    let metrics = analyze(path, config)?;
    let report = io::report::write_report(&metrics, path)?;
    Ok((metrics, report))
}
