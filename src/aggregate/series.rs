//! Per-node utilization time series from one metric log.

use crate::error::{Error, Result};
use crate::layout;
use crate::logs::{self, LogName};
use crate::model::{BenchmarkRun, TimeSeries};

use log::debug;
use std::fs;
use std::path::Path;

/// Select the unique file among `names` starting with `<metric>_<size>`.
///
/// Zero matches and multiple matches are both errors; filesystem
/// enumeration order never decides the winner.
pub fn select_metric_log(names: &[String], metric: &str, input_size_mb: u64) -> Result<String> {
    let prefix = format!("{}_{}", metric, input_size_mb);
    let matches: Vec<&String> = names.iter().filter(|n| n.starts_with(&prefix)).collect();
    match matches.as_slice() {
        [] => Err(Error::missing_file(format!("metric log matching {prefix}*"))),
        [one] => Ok((*one).clone()),
        many => Err(Error::AmbiguousFile {
            pattern: format!("{prefix}*"),
            matches: many.iter().map(|n| (*n).clone()).collect(),
        }),
    }
}

/// Build one node's time series for a metric and input size.
///
/// The log's first row holds the entire sampled series; the i-th sample
/// (0-based) gets timestamp `(i + 1) * sampling_period`. `normalize`, if
/// supplied by the caller, is applied to every value (e.g. dividing CPU
/// percentages by a core-count scale).
#[allow(clippy::too_many_arguments)]
pub fn build_series(
    root: &Path,
    problem: &str,
    node: &str,
    framework: &str,
    metric: &str,
    input_size_mb: u64,
    sampling_period: f64,
    normalize: Option<&dyn Fn(f64) -> f64>,
) -> Result<TimeSeries> {
    let dir = layout::node_framework_dir(root, problem, node, framework);
    let names = layout::list_file_names(&dir)?;
    let chosen = select_metric_log(&names, metric, input_size_mb)?;
    debug!("selected {} for {}/{}/{}", chosen, problem, node, framework);

    let decoded = LogName::decode(&chosen)?;
    let path = dir.join(&chosen);
    let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;

    let row = logs::parse_first_row(&text)?.unwrap_or_default();
    if row.is_empty() {
        return Err(Error::EmptyLog { path });
    }

    let samples = row
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let value = normalize.map_or(value, |f| f(value));
            ((i + 1) as f64 * sampling_period, value)
        })
        .collect();

    Ok(TimeSeries {
        node: node.to_string(),
        metric: decoded.metric.clone(),
        run: BenchmarkRun {
            problem: problem.to_string(),
            framework: framework.to_string(),
            input_size_mb: decoded.input_size_mb,
            map_tasks: decoded.map_tasks,
            reduce_tasks: decoded.reduce_tasks,
        },
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn selects_the_unique_prefix_match() {
        let files = names(&[
            "cpu_1536MB_m24_r6.log",
            "mem_1536MB_m24_r6.log",
            "procs_1536MB_m24_r6.log",
        ]);
        assert_eq!(
            select_metric_log(&files, "cpu", 1536).unwrap(),
            "cpu_1536MB_m24_r6.log"
        );
    }

    #[test]
    fn zero_matches_is_missing_file() {
        let files = names(&["mem_1536MB_m24_r6.log"]);
        let err = select_metric_log(&files, "cpu", 1536).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }), "{err}");
    }

    #[test]
    fn two_matches_is_ambiguous_not_last_wins() {
        let files = names(&["cpu_1536MB_m24_r6.log", "cpu_1536MB_m24_r6.log.bak"]);
        let err = select_metric_log(&files, "cpu", 1536).unwrap_err();
        match err {
            Error::AmbiguousFile { matches, .. } => assert_eq!(matches.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn proc_prefix_does_not_swallow_procs() {
        let files = names(&["procs_1536MB_m24_r6.log"]);
        let err = select_metric_log(&files, "proc", 1536).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }), "{err}");
    }

    fn node_dir(tmp: &tempfile::TempDir) -> std::path::PathBuf {
        let dir = tmp
            .path()
            .join("kmeans")
            .join("cloud3")
            .join("hadoop-mr");
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn timestamps_step_by_sampling_period() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            node_dir(&tmp).join("cpu_1536MB_m24_r6.log"),
            "300, 600, 900,\n",
        )
        .unwrap();

        let series = build_series(
            tmp.path(),
            "kmeans",
            "cloud3",
            "hadoop-mr",
            "cpu",
            1536,
            2.0,
            None,
        )
        .unwrap();

        assert_eq!(
            series.samples,
            vec![(2.0, 300.0), (4.0, 600.0), (6.0, 900.0)]
        );
        assert_eq!(series.run.input_size_mb, 1536);
        assert_eq!(series.run.map_tasks, 24);
    }

    #[test]
    fn normalization_applies_to_every_value() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            node_dir(&tmp).join("cpu_1536MB_m24_r6.log"),
            "600, 1200\n",
        )
        .unwrap();

        let scale = 1200.0;
        let normalize = move |v: f64| v / scale;
        let series = build_series(
            tmp.path(),
            "kmeans",
            "cloud3",
            "hadoop-mr",
            "cpu",
            1536,
            1.0,
            Some(&normalize),
        )
        .unwrap();

        assert_eq!(series.samples, vec![(1.0, 0.5), (2.0, 1.0)]);
    }

    #[test]
    fn only_the_first_row_is_read() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            node_dir(&tmp).join("mem_1536MB_m24_r6.log"),
            "5, 6\nnot-a-number, 8\n",
        )
        .unwrap();

        let series = build_series(
            tmp.path(),
            "kmeans",
            "cloud3",
            "hadoop-mr",
            "mem",
            1536,
            1.0,
            None,
        )
        .unwrap();

        assert_eq!(series.samples, vec![(1.0, 5.0), (2.0, 6.0)]);
    }

    #[test]
    fn empty_log_is_surfaced_never_an_empty_series() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(node_dir(&tmp).join("mem_1536MB_m24_r6.log"), "\n").unwrap();

        let err = build_series(
            tmp.path(),
            "kmeans",
            "cloud3",
            "hadoop-mr",
            "mem",
            1536,
            1.0,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyLog { .. }), "{err}");
    }
}
