//! Peak detection over the autocorrelation profile.
//!
//! The detector is a capability behind the [`PeakFinder`] trait so the
//! metrics stage can be exercised against a mocked beat set. The
//! default [`ThresholdPeakFinder`] reports local maxima above a
//! range-normalized threshold, with a minimum index spacing resolved in
//! favour of the higher-amplitude peak.

/// Finds indices of local maxima in a 1-D sequence.
#[cfg_attr(test, mockall::automock)]
pub trait PeakFinder {
    /// Returns peak indices in ascending order.
    ///
    /// `sensitivity` is interpreted as a fraction of the signal's
    /// amplitude range: candidates below
    /// `sensitivity * (max - min) + min` are rejected. No two reported
    /// peaks are closer than `min_spacing` indices. Zero or one peak is
    /// a valid result; callers must not assume a minimum count.
    fn find_peaks(&self, signal: &[f64], sensitivity: f64, min_spacing: usize) -> Vec<usize>;
}

/// Threshold-and-spacing peak detector.
pub struct ThresholdPeakFinder;

impl PeakFinder for ThresholdPeakFinder {
    fn find_peaks(&self, signal: &[f64], sensitivity: f64, min_spacing: usize) -> Vec<usize> {
        if signal.len() < 3 {
            return Vec::new();
        }

        let min = signal.iter().copied().fold(f64::INFINITY, f64::min);
        let max = signal.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let threshold = sensitivity * (max - min) + min;

        // Interior local maxima above the threshold.
        let mut candidates: Vec<usize> = (1..signal.len() - 1)
            .filter(|&i| {
                signal[i] > signal[i - 1] && signal[i] > signal[i + 1] && signal[i] > threshold
            })
            .collect();

        // Enforce spacing, highest amplitude first.
        candidates.sort_by(|&a, &b| signal[b].partial_cmp(&signal[a]).unwrap());
        let mut kept: Vec<usize> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if kept
                .iter()
                .all(|&peak| candidate.abs_diff(peak) >= min_spacing)
            {
                kept.push(candidate);
            }
        }
        kept.sort_unstable();
        kept
    }
}
