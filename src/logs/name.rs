//! Codec for the metadata embedded in a benchmark log filename.
//!
//! Timing log:  time_<inputSizeMB>MB_m<mapTasks>_r<reduceTasks>.log
//! Metric log:  <metricKind>_<inputSizeMB>MB_m<mapTasks>_r<reduceTasks>.<ext>
//!
//! Example: cpu_384MB_m6_r6.log

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static DELIMS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_.]").expect("delimiter pattern"));

/// Metadata decoded from one log filename. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogName {
    pub metric: String,
    pub input_size_mb: u64,
    pub map_tasks: u32,
    pub reduce_tasks: u32,
}

impl LogName {
    /// Decode a filename into its metadata fields.
    ///
    /// The stem (extension stripped) must split into exactly four tokens on
    /// `_`/`.`: metric kind, `<n>MB`, `m<p>`, `r<q>`. Wrong token counts and
    /// non-numeric remainders are errors, never defaulted.
    pub fn decode(name: &str) -> Result<Self> {
        let stem = name.rsplit_once('.').map_or(name, |(stem, _ext)| stem);
        let tokens: Vec<&str> = DELIMS.split(stem).collect();
        if tokens.len() != 4 {
            return Err(Error::filename(
                name,
                format!("expected 4 tokens, got {}", tokens.len()),
            ));
        }

        let size = tokens[1]
            .strip_suffix("MB")
            .ok_or_else(|| Error::filename(name, "input-size token must end in MB"))?;
        let maps = tokens[2]
            .strip_prefix('m')
            .ok_or_else(|| Error::filename(name, "map-tasks token must begin with m"))?;
        let reduces = tokens[3]
            .strip_prefix('r')
            .ok_or_else(|| Error::filename(name, "reduce-tasks token must begin with r"))?;

        Ok(Self {
            metric: tokens[0].to_string(),
            input_size_mb: parse_field(name, "input size", size)?,
            map_tasks: parse_field(name, "map tasks", maps)?,
            reduce_tasks: parse_field(name, "reduce tasks", reduces)?,
        })
    }

    /// Re-encode the fields into the filename template, minus the extension.
    pub fn encode(&self) -> String {
        format!(
            "{}_{}MB_m{}_r{}",
            self.metric, self.input_size_mb, self.map_tasks, self.reduce_tasks
        )
    }

    /// Ordering key for runtime curves: the input size in MB.
    pub fn sort_key(&self) -> u64 {
        self.input_size_mb
    }
}

fn parse_field<T: std::str::FromStr>(name: &str, field: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::filename(name, format!("non-numeric {} field {:?}", field, raw)))
}
