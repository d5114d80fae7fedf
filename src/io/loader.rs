//! Sample loader for single-lead ECG recordings.
//!
//! Recordings are CSV files with one `time,voltage` pair per line.
//! Entries that do not parse as finite numbers are coerced to missing
//! and filled by linear interpolation between the nearest valid
//! neighbours; missing values at either end take the nearest valid
//! value.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::error::HrmError;

/// An ordered sequence of `(time, voltage)` samples.
///
/// After loading, both sequences have equal length, every value is
/// finite, and `times` is non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    pub times: Vec<f64>,
    pub voltages: Vec<f64>,
}

impl Recording {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Reads a recording from `path`.
///
/// # Errors
///
/// - [`HrmError::SourceNotFound`] if `path` does not exist.
/// - [`HrmError::UndefinedMetric`] if fewer than two rows remain after
///   coercion, or a whole column has no numeric entry to interpolate
///   from.
/// - [`HrmError::Io`] for any other read failure.
pub fn load_recording(path: &Path) -> Result<Recording, HrmError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => HrmError::SourceNotFound(path.to_path_buf()),
        _ => HrmError::Io(e),
    })?;
    let reader = io::BufReader::new(file);

    let mut times = Vec::new();
    let mut voltages = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.splitn(2, ',');
        times.push(parse_sample(fields.next()));
        voltages.push(parse_sample(fields.next()));
    }

    if times.len() < 2 {
        return Err(HrmError::UndefinedMetric(format!(
            "recording must contain at least two samples, got {}",
            times.len()
        )));
    }

    Ok(Recording {
        times: interpolate_missing(&times, "time")?,
        voltages: interpolate_missing(&voltages, "voltage")?,
    })
}

/// Coerces one CSV field to a finite sample, or missing.
fn parse_sample(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Fills missing entries by linear interpolation between the nearest
/// valid neighbours. Leading and trailing gaps take the nearest valid
/// value.
fn interpolate_missing(column: &[Option<f64>], name: &str) -> Result<Vec<f64>, HrmError> {
    let first = column.iter().position(Option::is_some);
    let Some(first) = first else {
        return Err(HrmError::UndefinedMetric(format!(
            "{name} column contains no numeric entries"
        )));
    };
    let last = column.iter().rposition(Option::is_some).unwrap_or(first);

    let mut filled = vec![0.0; column.len()];
    for i in 0..first {
        filled[i] = column[first].unwrap();
    }
    for i in last + 1..column.len() {
        filled[i] = column[last].unwrap();
    }

    let mut i = first;
    while i <= last {
        match column[i] {
            Some(v) => {
                filled[i] = v;
                i += 1;
            }
            None => {
                // Gap [i, end) bounded by valid samples on both sides.
                let mut end = i;
                while column[end].is_none() {
                    end += 1;
                }
                let lo = filled[i - 1];
                let hi = column[end].unwrap();
                let span = (end - i + 1) as f64;
                for (step, slot) in filled[i..end].iter_mut().enumerate() {
                    *slot = lo + (hi - lo) * (step + 1) as f64 / span;
                }
                i = end;
            }
        }
    }

    Ok(filled)
}
