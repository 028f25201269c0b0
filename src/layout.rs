//! Explicit path composition over the results tree.
//!
//! Read contract:
//!   <root>/<problem>/<framework>/time_*.log            timing logs
//!   <root>/<problem>/<node>/<framework>/<metric>_*     per-node metric logs
//!
//! Every lookup takes the results root explicitly; nothing mutates the
//! process working directory, so calls stay referentially transparent.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn framework_dir(root: &Path, problem: &str, framework: &str) -> PathBuf {
    root.join(problem).join(framework)
}

pub fn node_framework_dir(root: &Path, problem: &str, node: &str, framework: &str) -> PathBuf {
    root.join(problem).join(node).join(framework)
}

/// Lexically sorted file names in a directory. Sorting makes discovery
/// order stable across filesystems; it is never used to disambiguate a
/// selection (see the aggregators).
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let is_file = entry
            .file_type()
            .map_err(|e| Error::io(dir, e))?
            .is_file();
        if is_file {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Timing logs for one problem/framework, lexically sorted.
pub fn timing_logs(root: &Path, problem: &str, framework: &str) -> Result<Vec<PathBuf>> {
    let dir = framework_dir(root, problem, framework);
    Ok(list_file_names(&dir)?
        .into_iter()
        .filter(|n| n.starts_with("time_") && n.ends_with(".log"))
        .map(|n| dir.join(n))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn timing_logs_are_filtered_and_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("wordcount").join("hadoop-mr");
        fs::create_dir_all(&dir).unwrap();
        for name in [
            "time_768MB_m12_r6.log",
            "time_192MB_m3_r6.log",
            "cpu_192MB_m3_r6.log",
            "notes.txt",
        ] {
            fs::write(dir.join(name), "1.0\n").unwrap();
        }

        let logs = timing_logs(tmp.path(), "wordcount", "hadoop-mr").unwrap();
        let names: Vec<_> = logs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["time_192MB_m3_r6.log", "time_768MB_m12_r6.log"]);
    }

    #[test]
    fn missing_directory_reports_its_path() {
        let tmp = tempfile::tempdir().unwrap();
        let err = timing_logs(tmp.path(), "wordcount", "nope").unwrap_err();
        assert!(err.to_string().contains("nope"), "{err}");
    }
}
