//! Aggregation layer: runtime curves and per-node time series.

pub mod runtime;
pub mod series;

pub use runtime::{BatchMode, CurveOutcome, FileFailure, aggregate_problem, aggregate_runtimes};
pub use series::{build_series, select_metric_log};
