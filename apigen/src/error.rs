//! Error types for a generation run.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for the apigen facade.
#[derive(Debug, Error)]
pub enum ApiGenError {
    /// Parsing, directive or registry error.
    #[error(transparent)]
    Schema(#[from] apigen_schema::SchemaError),

    /// Generation error.
    #[error(transparent)]
    Codegen(#[from] apigen_codegen::CodegenError),

    /// A schema resource could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the resource.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl ApiGenError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
