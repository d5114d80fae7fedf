/// This module contains the analysis stages of the heart-rate pipeline.
///
/// The available submodules are:
///
/// - `autocorrelation`: Computes the normalized self-similarity profile.
/// - `peaks`: Detects periodicity peaks in the profile.
/// - `metrics`: Derives heart-rate metrics from the detected beats.
pub mod autocorrelation;
pub mod metrics;
pub mod peaks;
