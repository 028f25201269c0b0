//! Tolerant-delimiter numeric row parsing.
//!
//! Log rows are comma-delimited with an optional space after each comma and
//! an allowed trailing separator:
//!
//! 12.3, 45.6, 78.9,
//!
//! Empty tokens produced by consecutive or trailing separators are dropped;
//! every surviving token must parse as a float or the row is rejected.

use crate::error::{Error, Result};

/// Parse one physical log line into its numeric samples.
pub fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>> {
    let normalized = line.trim_end().replace(", ", ",");
    let normalized = normalized.strip_suffix(',').unwrap_or(&normalized);

    let mut samples = Vec::new();
    for token in normalized.split(',') {
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| Error::NumericParse {
            token: token.to_string(),
            line_no,
        })?;
        samples.push(value);
    }
    Ok(samples)
}

/// Parse every non-blank line of a log into per-row samples, preserving
/// row order. One row is one trial in a timing log, or one full sampled
/// series in a utilization log.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(line, lineno + 1)?);
    }
    Ok(rows)
}

/// Parse only the first non-blank row of a log. A utilization log keeps
/// its entire sampled series in that row; a canonical timing log keeps its
/// elapsed-seconds value there. `None` means the log had no data row.
pub fn parse_first_row(text: &str) -> Result<Option<Vec<f64>>> {
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        return parse_row(line, lineno + 1).map(Some);
    }
    Ok(None)
}
