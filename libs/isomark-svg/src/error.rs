//! # Emit Errors
//!
//! Error types for writing assets and loading parameter files.

use std::io;
use std::path::PathBuf;

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while emitting assets.
///
/// Drawing itself cannot fail; only the file system and user-supplied
/// parameters can.
#[derive(Debug, Error)]
pub enum EmitError {
    /// File read or write failure, passed through unmodified
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Malformed parameter file
    #[error("Invalid parameter file {}: {source}", path.display())]
    Params {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Rejected render configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EmitError {
    /// Creates a parameter file error.
    pub fn params(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Params {
            path: path.into(),
            source,
        }
    }
}
