//! DC offset removal.
//!
//! Subtracting the mean keeps the autocorrelation at lag 0 dominated by
//! signal power rather than the squared offset.

use nalgebra::DVectorView;

/// Returns `voltages` with its mean subtracted from every sample.
///
/// An empty input maps to an empty output; the downstream analysis
/// rejects it there.
pub fn remove_mean(voltages: &[f64]) -> Vec<f64> {
    if voltages.is_empty() {
        return Vec::new();
    }
    let mean = DVectorView::from(voltages).mean();
    voltages.iter().map(|v| v - mean).collect()
}

/// Mean of the voltage sequence, for diagnostics.
pub fn mean_voltage(voltages: &[f64]) -> f64 {
    if voltages.is_empty() {
        return 0.0;
    }
    DVectorView::from(voltages).mean()
}
