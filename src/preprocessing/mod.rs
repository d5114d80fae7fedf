//! This module contains the preprocessing stages applied before the
//! autocorrelation analysis.
//!
//! The `window` submodule clamps a recording to the requested analysis
//! interval. The `baseline` submodule removes the DC offset from the
//! voltage sequence.
pub mod baseline;
pub mod window;
