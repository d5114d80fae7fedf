//! Analysis configuration and parameter validation.
//!
//! All user-facing parameters are checked here, before any file I/O or
//! numeric work runs. A bad parameter therefore never triggers partial
//! work: `AnalysisConfig::validate` either yields a fully checked
//! [`DetectionParameters`] or the specific rejection.

use crate::error::HrmError;

/// Default peak sensitivity threshold, as a fraction of the
/// autocorrelation profile's amplitude range.
pub const DEFAULT_SENSITIVITY: f64 = 0.18;

/// Default minimum spacing between detected peaks, in profile indices.
pub const DEFAULT_MIN_SPACING: f64 = 200.0;

/// User-facing analysis parameters, unvalidated.
///
/// `min_spacing` is carried as `f64` so that fractional inputs are
/// accepted and truncated, matching the loader-facing contract; the
/// validated [`DetectionParameters`] holds the coerced integer.
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Length of the analysis window in seconds, clamped to the
    /// recording duration. Zero is permitted and yields an empty
    /// window, which surfaces as [`HrmError::UndefinedMetric`] later.
    pub requested_seconds: f64,
    /// Peak detection sensitivity in `(0, 1]`.
    pub sensitivity: f64,
    /// Minimum index spacing between detected peaks.
    pub min_spacing: f64,
}

impl AnalysisConfig {
    /// Configuration with the default detection tuning.
    pub fn new(requested_seconds: f64) -> Self {
        Self {
            requested_seconds,
            sensitivity: DEFAULT_SENSITIVITY,
            min_spacing: DEFAULT_MIN_SPACING,
        }
    }

    /// Checks every parameter and coerces `min_spacing` to an integer.
    ///
    /// # Errors
    ///
    /// - [`HrmError::InvalidArgument`] if a parameter is NaN.
    /// - [`HrmError::OutOfRange`] if `requested_seconds` is negative or
    ///   `sensitivity`/`min_spacing` is not strictly positive.
    pub fn validate(&self) -> Result<DetectionParameters, HrmError> {
        check_interval(self.requested_seconds)?;
        check_threshold(self.sensitivity)?;
        check_min_spacing(self.min_spacing)?;
        Ok(DetectionParameters {
            sensitivity: self.sensitivity,
            min_spacing: self.min_spacing as usize,
        })
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        // An infinite window clamps to the whole recording.
        Self::new(f64::INFINITY)
    }
}

/// Validated peak detection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionParameters {
    pub sensitivity: f64,
    pub min_spacing: usize,
}

fn check_interval(requested_seconds: f64) -> Result<(), HrmError> {
    if requested_seconds.is_nan() {
        return Err(HrmError::InvalidArgument {
            name: "requested_seconds",
        });
    }
    if requested_seconds < 0.0 {
        return Err(HrmError::OutOfRange {
            name: "requested_seconds",
            value: requested_seconds,
        });
    }
    Ok(())
}

fn check_threshold(sensitivity: f64) -> Result<(), HrmError> {
    if sensitivity.is_nan() {
        return Err(HrmError::InvalidArgument {
            name: "sensitivity",
        });
    }
    if sensitivity <= 0.0 {
        return Err(HrmError::OutOfRange {
            name: "sensitivity",
            value: sensitivity,
        });
    }
    Ok(())
}

fn check_min_spacing(min_spacing: f64) -> Result<(), HrmError> {
    if min_spacing.is_nan() {
        return Err(HrmError::InvalidArgument {
            name: "min_spacing",
        });
    }
    if min_spacing <= 0.0 {
        return Err(HrmError::OutOfRange {
            name: "min_spacing",
            value: min_spacing,
        });
    }
    Ok(())
}
