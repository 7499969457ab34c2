use std::io;
use std::path::PathBuf;

use thiserror::Error;

/**
    Error returned by `FromStr` implementations on enum and key types.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

/**
    Errors from reading or writing a persisted source descriptor.
*/
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON descriptor: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML descriptor: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported descriptor format for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
}
