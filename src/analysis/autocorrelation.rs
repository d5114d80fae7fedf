//! Normalized autocorrelation of the voltage sequence.
//!
//! The profile's peaks at non-zero lags correspond to the dominant
//! beat-to-beat period of the recording.

use nalgebra::DVectorView;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::HrmError;

/// Computes the self-similarity profile of `voltage` over non-negative
/// time lags.
///
/// For an `N`-sample input the profile has `ceil(N / 2)` entries; the
/// value at lag `k` is the dot product of the sequence with itself
/// shifted by `k`, divided by the `N - k` overlapping pairs so that
/// partial overlaps at large lags are not suppressed relative to lag 0.
/// The whole profile is then scaled by the lag-0 value, so index 0 is
/// exactly 1.0.
///
/// # Errors
///
/// [`HrmError::UndefinedMetric`] if fewer than two samples are given or
/// the sequence has zero variance (lag-0 power of a mean-removed
/// constant signal is zero, and the normalization would divide by it).
pub fn correlation_profile(voltage: &[f64]) -> Result<Vec<f64>, HrmError> {
    let n = voltage.len();
    if n < 2 {
        return Err(HrmError::UndefinedMetric(format!(
            "autocorrelation requires at least two samples, got {n}"
        )));
    }

    let lags = n.div_ceil(2);
    let raw: Vec<f64> = (0..lags)
        .into_par_iter()
        .map(|lag| {
            let head = DVectorView::from(&voltage[..n - lag]);
            let tail = DVectorView::from(&voltage[lag..]);
            head.dot(&tail) / (n - lag) as f64
        })
        .collect();

    let lag_zero = raw[0];
    if lag_zero <= f64::EPSILON {
        return Err(HrmError::UndefinedMetric(
            "voltage sequence has zero variance".into(),
        ));
    }

    Ok(raw.iter().map(|v| v / lag_zero).collect())
}
