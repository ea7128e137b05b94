use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single input line was rejected.
///
/// These never escape [`crate::parse_host_lines`]; the line is skipped and
/// parsing continues with the next one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },
    #[error("invalid time of day: {0}")]
    InvalidTime(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid {field}: {value}")]
    InvalidInteger { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum HostDataError {
    #[error("Failed to read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, HostDataError>;
