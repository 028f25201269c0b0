//! Offline repair of corrupted per-node metric logs.
//!
//! The canonical timing log gives the true elapsed seconds `t` for a run;
//! the corrupted collector kept sampling past the end of the run, so each
//! metric row is truncated to `ceil(t)` samples. On top of that the
//! corrupted source filed cpu samples under the mem label and vice versa,
//! which the configured relabel map corrects. Sources under `corrupted/`
//! are read-only; corrected logs are written next to the timing logs.

use crate::config::RepairConfig;
use crate::error::{Error, Result};
use crate::logs;

use log::info;
use std::fs;
use std::path::Path;

/// Run one repair pass over every configured run and node.
pub fn repair(root: &Path, cfg: &RepairConfig) -> Result<()> {
    let problem_dir = root.join(&cfg.problem);
    for &multiplier in &cfg.multipliers {
        let input_size_mb = multiplier * cfg.size_step_mb;
        let map_tasks = multiplier * u64::from(cfg.map_task_step);

        let timing = problem_dir.join(&cfg.framework).join(format!(
            "time_{}MB_m{}_r{}.log",
            input_size_mb, map_tasks, cfg.reduce_tasks
        ));
        let elapsed = canonical_elapsed(&timing)?;
        let sample_count = elapsed.ceil() as usize;

        for node in &cfg.nodes {
            for metric in &cfg.metrics {
                let log_name = format!(
                    "{}_{}MB_m{}_r{}.log",
                    metric, input_size_mb, map_tasks, cfg.reduce_tasks
                );
                let src = problem_dir
                    .join("corrupted")
                    .join(node)
                    .join(&cfg.framework)
                    .join(&log_name);

                let out_name = format!(
                    "{}_{}MB_m{}_r{}.log",
                    cfg.output_label(metric),
                    input_size_mb,
                    map_tasks,
                    cfg.reduce_tasks
                );
                let dst_dir = problem_dir.join(node).join(&cfg.framework);
                let dst = dst_dir.join(&out_name);

                write_truncated(&src, &dst, sample_count)?;
                info!(
                    "repaired {} -> {} ({} samples)",
                    src.display(),
                    dst.display(),
                    sample_count
                );
            }
        }
    }
    Ok(())
}

/// The single elapsed-seconds value of a canonical timing log.
fn canonical_elapsed(path: &Path) -> Result<f64> {
    let row = first_row(path)?;
    row.first().copied().ok_or_else(|| Error::EmptyLog {
        path: path.to_path_buf(),
    })
}

/// Truncate a corrupted metric row to `sample_count` samples and write it
/// out as a separator-joined row. The source file is never modified.
fn write_truncated(src: &Path, dst: &Path, sample_count: usize) -> Result<()> {
    let row = first_row(src)?;
    let truncated: Vec<String> = row
        .iter()
        .take(sample_count)
        .map(|v| v.to_string())
        .collect();

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(dst, truncated.join(", ")).map_err(|e| Error::io(dst, e))?;
    Ok(())
}

fn first_row(path: &Path) -> Result<Vec<f64>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    logs::parse_first_row(&text)?.ok_or_else(|| Error::EmptyLog {
        path: path.to_path_buf(),
    })
}
