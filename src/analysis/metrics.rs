//! Heart-rate metrics derived from the detected beat set.

use nalgebra::DVectorView;
use serde::{Deserialize, Serialize};

use crate::error::HrmError;

/// Terminal output of the pipeline, immutable once computed.
///
/// Serialized field names match the report format consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean heart rate over the analysis window, in beats per minute.
    #[serde(rename = "Mean HR (BPM)")]
    pub mean_hr_bpm: f64,
    /// Minimum and maximum of the windowed, mean-removed voltages.
    #[serde(rename = "Voltage Extremes")]
    pub voltage_extremes: (f64, f64),
    /// Time span of the windowed recording, in seconds.
    #[serde(rename = "Duration")]
    pub duration: f64,
    /// Number of detected beats.
    #[serde(rename = "Number of Beats")]
    pub num_beats: usize,
    /// Timestamps of the detected beats, in seconds.
    #[serde(rename = "Beats")]
    pub beats: Vec<f64>,
}

/// Converts peak indices into the full metric set.
///
/// The mean rate uses the span between the first and last detected
/// beat, `k * 60 / (t_last - t_first)`, not an average of inter-beat
/// intervals; this is the documented contract of the pipeline.
///
/// # Errors
///
/// [`HrmError::UndefinedMetric`] if the windowed recording is empty or
/// fewer than two beats were detected (the span would be zero or
/// undefined).
pub fn compute(
    times: &[f64],
    voltages: &[f64],
    peak_indices: &[usize],
) -> Result<Metrics, HrmError> {
    if times.len() < 2 || voltages.is_empty() {
        return Err(HrmError::UndefinedMetric(
            "windowed recording is too short to derive metrics".into(),
        ));
    }

    let beats: Vec<f64> = peak_indices.iter().map(|&i| times[i]).collect();
    if beats.len() < 2 {
        return Err(HrmError::UndefinedMetric(format!(
            "mean heart rate needs at least two detected beats, got {}",
            beats.len()
        )));
    }

    let span = beats[beats.len() - 1] - beats[0];
    if span <= 0.0 {
        return Err(HrmError::UndefinedMetric(
            "detected beats span a zero interval".into(),
        ));
    }

    let voltage_view = DVectorView::from(voltages);
    Ok(Metrics {
        mean_hr_bpm: beats.len() as f64 * 60.0 / span,
        voltage_extremes: (voltage_view.min(), voltage_view.max()),
        duration: times[times.len() - 1] - times[0],
        num_beats: beats.len(),
        beats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64 * 0.1).collect()
    }

    #[test]
    fn test_span_formula() {
        let times = times(100);
        let voltages = vec![0.0; 100];
        // Beats at 1.0 s, 2.0 s, 3.0 s: span 2.0 s.
        let metrics = compute(&times, &voltages, &[10, 20, 30]).unwrap();
        assert!((metrics.mean_hr_bpm - 3.0 * 60.0 / 2.0).abs() < 1e-12);
        assert_eq!(metrics.num_beats, 3);
        assert_eq!(metrics.beats, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_voltage_extremes_are_ordered() {
        let voltages = vec![-0.5, 0.1, 0.9, -0.2];
        let metrics = compute(&times(4), &voltages, &[1, 2]).unwrap();
        assert_eq!(metrics.voltage_extremes, (-0.5, 0.9));
        assert!(metrics.voltage_extremes.0 <= metrics.voltage_extremes.1);
    }

    #[test]
    fn test_duration_is_first_to_last_sample() {
        let metrics = compute(&times(100), &vec![0.0; 100], &[10, 90]).unwrap();
        assert!((metrics.duration - 9.9).abs() < 1e-12);
    }

    #[test]
    fn test_fewer_than_two_beats_is_undefined() {
        assert!(matches!(
            compute(&times(10), &vec![0.0; 10], &[]),
            Err(HrmError::UndefinedMetric(_))
        ));
        assert!(matches!(
            compute(&times(10), &vec![0.0; 10], &[4]),
            Err(HrmError::UndefinedMetric(_))
        ));
    }

    #[test]
    fn test_zero_span_is_undefined() {
        let result = compute(&times(10), &vec![0.0; 10], &[3, 3]);
        assert!(matches!(result, Err(HrmError::UndefinedMetric(_))));
    }

    #[test]
    fn test_empty_recording_is_undefined() {
        assert!(compute(&[], &[], &[]).is_err());
    }

    #[test]
    fn test_compute_from_mocked_beat_set() {
        use crate::analysis::peaks::{MockPeakFinder, PeakFinder};

        let mut finder = MockPeakFinder::new();
        finder
            .expect_find_peaks()
            .times(1)
            .returning(|_, _, _| vec![10, 20, 30]);

        let profile = vec![0.0; 50];
        let peaks = finder.find_peaks(&profile, 0.18, 5);
        let metrics = compute(&times(100), &vec![0.0; 100], &peaks).unwrap();
        assert_eq!(metrics.num_beats, 3);
    }

    #[test]
    fn test_report_field_names() {
        let metrics = compute(&times(100), &vec![0.0; 100], &[10, 20]).unwrap();
        let json = serde_json::to_value(&metrics).unwrap();
        for key in [
            "Mean HR (BPM)",
            "Voltage Extremes",
            "Duration",
            "Number of Beats",
            "Beats",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
