//! Typed failures of the log-aggregation pipeline.
//!
//! Every parse or lookup failure is surfaced to the caller; no component
//! silently drops a bad token or substitutes an empty series.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("bad log filename {name:?}: {reason}")]
    FilenameFormat { name: String, reason: String },

    #[error("non-numeric token {token:?} in data row at line {line_no}")]
    NumericParse { token: String, line_no: usize },

    #[error("no file found for {what}")]
    MissingFile { what: String },

    #[error("{} files match {pattern:?}, expected exactly one: {}", .matches.len(), .matches.join(", "))]
    AmbiguousFile {
        pattern: String,
        matches: Vec<String>,
    },

    #[error("log {} has no data row", .path.display())]
    EmptyLog { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn filename(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FilenameFormat {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_file(what: impl Into<String>) -> Self {
        Self::MissingFile { what: what.into() }
    }
}
