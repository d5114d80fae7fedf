//! JSON report writer.
//!
//! The report lands next to the source recording, named after it with a
//! `.json` suffix appended to the full file name (`strip.csv` becomes
//! `strip.csv.json`).

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::analysis::metrics::Metrics;
use crate::error::HrmError;

/// Serializes `metrics` and writes the report for `recording_path`.
///
/// Returns the path of the written report.
pub fn write_report(metrics: &Metrics, recording_path: &Path) -> Result<PathBuf, HrmError> {
    let report_path = report_path_for(recording_path);
    let file = File::create(&report_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, metrics)?;
    writer.flush()?;
    Ok(report_path)
}

fn report_path_for(recording_path: &Path) -> PathBuf {
    let mut file_name = recording_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    file_name.push(".json");
    recording_path.with_file_name(file_name)
}
