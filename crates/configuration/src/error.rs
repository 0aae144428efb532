//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::environment::Variable;

/// The errors that can be thrown when parsing a configuration directory.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("invalid value for {node} in {file_path}: {message}")]
    ValidateError {
        file_path: PathBuf,
        node: String,
        message: String,
    },
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

/// The errors that can be thrown when resolving a parsed configuration against the environment.
#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("missing environment variable {variable} for {node}")]
    MissingEnvironmentVariable { variable: Variable, node: String },
    #[error("environment variable {variable} for {node} does not contain valid unicode")]
    InvalidEnvironmentVariable { variable: Variable, node: String },
}

impl MakeRuntimeConfigurationError {
    /// The configuration node whose value could not be resolved.
    pub fn node(&self) -> &str {
        match self {
            MakeRuntimeConfigurationError::MissingEnvironmentVariable { node, .. }
            | MakeRuntimeConfigurationError::InvalidEnvironmentVariable { node, .. } => node,
        }
    }
}

/// The errors that can be thrown when writing a configuration directory.
#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("unable to serialize the configuration: {0}")]
    SerializationError(#[from] serde_json::Error),
}
