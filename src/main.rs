use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};

use bench_results_viz::aggregate::{self, BatchMode};
use bench_results_viz::config::{ChartConfig, RepairConfig};
use bench_results_viz::model::PlotSeries;
use bench_results_viz::repair;

pub type Result<T> = anyhow::Result<T>;

/// Styles for framework runtime curves, assigned in argument order.
const CURVE_STYLES: &[&str] = &["ro-", "bo-", "go-", "co-", "mo-", "yo-"];

#[derive(Parser)]
#[command(name = "bench-results-viz")]
#[command(about = "Cluster benchmark log aggregator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate timing logs into runtime-vs-input-size curves.
    Runtimes {
        /// Results root directory.
        #[arg(long)]
        root: PathBuf,

        #[arg(long)]
        problem: String,

        /// Frameworks to compare, one curve each.
        #[arg(long, value_delimiter = ',')]
        frameworks: Vec<String>,

        /// Keep going on per-file errors and report them at the end.
        #[arg(long)]
        tolerant: bool,

        #[arg(short = 'o', long)]
        out: PathBuf,
    },

    /// Build per-node utilization time series for one metric and input size.
    Series {
        #[arg(long)]
        root: PathBuf,

        #[arg(long)]
        problem: String,

        #[arg(long)]
        framework: String,

        /// Metric kind: cpu, mem, proc or procs.
        #[arg(long)]
        metric: String,

        #[arg(long)]
        input_size: u64,

        /// Seconds between consecutive samples in the logs.
        #[arg(long)]
        period: f64,

        /// Chart configuration (node set, per-node styles, CPU scale).
        #[arg(long)]
        chart: Option<PathBuf>,

        #[arg(short = 'o', long)]
        out: PathBuf,
    },

    /// Repair corrupted per-node metric logs against canonical timing logs.
    Repair {
        #[arg(long)]
        root: PathBuf,

        /// Repair configuration (run series, node set, relabel map).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Runtimes {
            root,
            problem,
            frameworks,
            tolerant,
            out,
        } => {
            anyhow::ensure!(!frameworks.is_empty(), "no frameworks requested");
            let mode = if tolerant {
                BatchMode::Tolerant
            } else {
                BatchMode::Strict
            };

            let mut curves = Vec::new();
            for (i, framework) in frameworks.iter().enumerate() {
                let outcome = aggregate::aggregate_problem(&root, &problem, framework, mode)
                    .with_context(|| format!("aggregate runtimes for {problem}/{framework}"))?;
                for failure in &outcome.failures {
                    log::warn!("{}: {}", failure.file.display(), failure.error);
                }
                let style = CURVE_STYLES[i % CURVE_STYLES.len()];
                curves.push(PlotSeries::from_curve(framework, style, &outcome.points));
            }

            write_series(&out, &curves)?;
        }

        Commands::Series {
            root,
            problem,
            framework,
            metric,
            input_size,
            period,
            chart,
            out,
        } => {
            let chart = match chart {
                Some(path) => ChartConfig::load(&path)?,
                None => ChartConfig::default(),
            };

            // CPU readings are the only metric with a configured rescale.
            let scale = chart.cpu_scale;
            let normalize: Option<Box<dyn Fn(f64) -> f64>> = (metric == "cpu")
                .then(|| Box::new(move |v: f64| v / scale) as Box<dyn Fn(f64) -> f64>);

            let mut all = Vec::new();
            for node in &chart.nodes {
                let series = aggregate::build_series(
                    &root,
                    &problem,
                    &node.name,
                    &framework,
                    &metric,
                    input_size,
                    period,
                    normalize.as_deref(),
                )
                .with_context(|| {
                    format!("build {metric} series for {problem}/{}/{framework}", node.name)
                })?;
                all.push(PlotSeries::from_series(&node.name, &node.style, &series));
            }

            write_series(&out, &all)?;
        }

        Commands::Repair { root, config } => {
            let cfg = match config {
                Some(path) => RepairConfig::load(&path)?,
                None => RepairConfig::default(),
            };
            repair::repair(&root, &cfg)
                .with_context(|| format!("repair {} logs under {}", cfg.problem, root.display()))?;
            println!("Repaired {} logs under {}", cfg.problem, root.display());
        }
    }

    Ok(())
}

fn write_series(out: &Path, series: &[PlotSeries]) -> Result<()> {
    let json = serde_json::to_string_pretty(series)?;
    fs::write(out, json).with_context(|| format!("write {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
