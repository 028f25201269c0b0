//! Aggregation core for distributed-framework benchmark results.
//!
//! Turns raw per-node resource-utilization and timing logs into
//! ready-to-plot series: decode filename metadata, parse irregular
//! numeric rows, average repeated trials into runtime curves, align
//! utilization samples into time series, and repair a known class of
//! corrupted per-node logs.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod layout;
pub mod logs;
pub mod model;
pub mod repair;

pub use error::{Error, Result};
