//! Data model shared by the aggregators and the plot hand-off.
//!
//! Everything here is derived from logs on disk and rebuilt per call; the
//! charting collaborator receives only `PlotSeries` values, never raw logs.

use serde::Serialize;

/// One experimental configuration. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRun {
    pub problem: String,
    pub framework: String,
    pub input_size_mb: u64,
    pub map_tasks: u32,
    pub reduce_tasks: u32,
}

/// One point on a runtime-vs-input-size curve: the mean over all trials
/// in a single timing log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimePoint {
    pub input_size_mb: u64,
    pub mean_elapsed_secs: f64,
}

/// One node's sampled utilization series for a metric and run.
///
/// `samples` pairs are (timestamp seconds, value); the i-th sample
/// (1-indexed) sits at `i * sampling_period`.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub node: String,
    pub metric: String,
    pub run: BenchmarkRun,
    pub samples: Vec<(f64, f64)>,
}

/// A ready-to-plot series: paired x/y vectors plus a display style tag.
/// This is the full contract with the external charting collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct PlotSeries {
    pub label: String,
    pub style: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PlotSeries {
    /// Runtime curve: x = input sizes ascending, y = mean elapsed seconds.
    pub fn from_curve(label: &str, style: &str, points: &[RuntimePoint]) -> Self {
        Self {
            label: label.to_string(),
            style: style.to_string(),
            x: points.iter().map(|p| p.input_size_mb as f64).collect(),
            y: points.iter().map(|p| p.mean_elapsed_secs).collect(),
        }
    }

    /// Utilization series: x = timestamps ascending, y = sampled values.
    pub fn from_series(label: &str, style: &str, series: &TimeSeries) -> Self {
        Self {
            label: label.to_string(),
            style: style.to_string(),
            x: series.samples.iter().map(|&(t, _)| t).collect(),
            y: series.samples.iter().map(|&(_, v)| v).collect(),
        }
    }
}
