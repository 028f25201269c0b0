//! Runtime-curve aggregation: one (input size, mean elapsed) point per
//! timing log, ordered by ascending input size.

use crate::error::{Error, Result};
use crate::layout;
use crate::logs::{self, LogName};
use crate::model::RuntimePoint;

use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Failure handling for a batch of timing logs. Strict is the default;
/// tolerant must be asked for explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchMode {
    /// First per-file error aborts the whole curve.
    #[default]
    Strict,
    /// Collect per-file errors, still return the points that parsed.
    Tolerant,
}

/// One file that failed during tolerant aggregation.
#[derive(Debug)]
pub struct FileFailure {
    pub file: PathBuf,
    pub error: Error,
}

/// A runtime curve plus whatever failed along the way (always empty in
/// strict mode).
#[derive(Debug)]
pub struct CurveOutcome {
    pub points: Vec<RuntimePoint>,
    pub failures: Vec<FileFailure>,
}

/// Aggregate a problem/framework's timing logs discovered under `root`.
pub fn aggregate_problem(
    root: &Path,
    problem: &str,
    framework: &str,
    mode: BatchMode,
) -> Result<CurveOutcome> {
    let files = layout::timing_logs(root, problem, framework)?;
    aggregate_runtimes(&files, mode)
}

/// Aggregate an explicit set of timing logs into an ordered curve.
///
/// An empty file set is an error: a silently empty curve would be
/// indistinguishable from a real result downstream.
pub fn aggregate_runtimes(files: &[PathBuf], mode: BatchMode) -> Result<CurveOutcome> {
    if files.is_empty() {
        return Err(Error::missing_file("timing logs (empty file set)"));
    }

    let mut points = Vec::new();
    let mut failures = Vec::new();
    for path in files {
        match runtime_point(path) {
            Ok(point) => points.push(point),
            Err(error) => match mode {
                BatchMode::Strict => return Err(error),
                BatchMode::Tolerant => {
                    warn!("skipping {}: {}", path.display(), error);
                    failures.push(FileFailure {
                        file: path.clone(),
                        error,
                    });
                }
            },
        }
    }

    // Total order by input size; the sort is stable, so discovery order
    // breaks ties.
    points.sort_by_key(|p| p.input_size_mb);
    Ok(CurveOutcome { points, failures })
}

/// Mean elapsed seconds over every trial token in one timing log.
fn runtime_point(path: &Path) -> Result<RuntimePoint> {
    let decoded = LogName::decode(&file_name(path)?)?;
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let mut trials = Vec::new();
    for row in logs::parse_rows(&text)? {
        trials.extend(row);
    }
    if trials.is_empty() {
        return Err(Error::EmptyLog {
            path: path.to_path_buf(),
        });
    }

    Ok(RuntimePoint {
        input_size_mb: decoded.input_size_mb,
        mean_elapsed_secs: trials.iter().sum::<f64>() / trials.len() as f64,
    })
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::missing_file(format!("file name of {}", path.display())))
}
