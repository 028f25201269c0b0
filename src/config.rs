//! Immutable run configuration, loaded from JSON and passed explicitly.
//!
//! The node set, per-node plot styles, and the repair run series are plain
//! values the caller hands to the aggregators, never ambient state.

use anyhow::{Context, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One cluster node and the display style tag the charting collaborator
/// should use for its series.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeStyle {
    pub name: String,
    pub style: String,
}

/// Chart-facing configuration for per-node utilization series.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    pub nodes: Vec<NodeStyle>,

    /// CPU readings are percent-per-core sums; divide by this to get a
    /// 0..1 utilization figure for the whole node.
    #[serde(default = "default_cpu_scale")]
    pub cpu_scale: f64,
}

fn default_cpu_scale() -> f64 {
    1200.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        let styles = [
            ("cloud2", "ro-"),
            ("cloud3", "gx-"),
            ("cloud4", "b^-"),
            ("cloud5", "ch-"),
            ("cloud6", "mH-"),
            ("cloud7", "y+-"),
        ];
        Self {
            nodes: styles
                .into_iter()
                .map(|(name, style)| NodeStyle {
                    name: name.to_string(),
                    style: style.to_string(),
                })
                .collect(),
            cpu_scale: default_cpu_scale(),
        }
    }
}

impl ChartConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read chart config {}", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse chart config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.nodes.is_empty() {
            bail!("chart config names no nodes");
        }
        if self.cpu_scale <= 0.0 {
            bail!("cpu_scale must be positive, got {}", self.cpu_scale);
        }
        Ok(())
    }
}

/// The fixed series of runs and nodes one repair pass covers, plus the
/// metric relabeling the corrupted harness made necessary.
#[derive(Debug, Clone, Deserialize)]
pub struct RepairConfig {
    pub problem: String,
    pub framework: String,

    /// Input size per run = multiplier * size_step_mb; map tasks =
    /// multiplier * map_task_step.
    pub multipliers: Vec<u64>,
    pub size_step_mb: u64,
    pub map_task_step: u32,
    pub reduce_tasks: u32,

    pub nodes: Vec<String>,

    /// Metric kinds to repair, in source-label terms.
    pub metrics: Vec<String>,

    /// Source metric label -> corrected output label. The historical
    /// collection harness wrote cpu samples under the mem label and vice
    /// versa; metrics absent from this map keep their label.
    #[serde(default)]
    pub relabel: BTreeMap<String, String>,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            problem: "wordcount".to_string(),
            framework: "stratosphere-mr".to_string(),
            multipliers: vec![1, 2, 4, 8, 16, 32],
            size_step_mb: 384,
            map_task_step: 6,
            reduce_tasks: 6,
            nodes: ["cloud2", "cloud3", "cloud4", "cloud5", "cloud6", "cloud7"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            metrics: ["cpu", "mem", "procs"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            relabel: BTreeMap::from([
                ("cpu".to_string(), "mem".to_string()),
                ("mem".to_string(), "cpu".to_string()),
            ]),
        }
    }
}

impl RepairConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read repair config {}", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse repair config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.multipliers.is_empty() {
            bail!("repair config names no multipliers");
        }
        if self.nodes.is_empty() {
            bail!("repair config names no nodes");
        }
        if self.metrics.is_empty() {
            bail!("repair config names no metrics");
        }
        for (src, dst) in &self.relabel {
            if !self.metrics.contains(src) {
                bail!("relabel source {src:?} is not a repaired metric");
            }
            if !self.metrics.contains(dst) {
                bail!("relabel target {dst:?} is not a repaired metric");
            }
        }
        Ok(())
    }

    /// Output label for a source metric.
    pub fn output_label<'a>(&'a self, metric: &'a str) -> &'a str {
        self.relabel.get(metric).map(String::as_str).unwrap_or(metric)
    }
}
