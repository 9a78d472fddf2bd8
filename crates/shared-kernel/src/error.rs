// crates/shared-kernel/src/error.rs
use std::{path::PathBuf, time::Duration};

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Every public operation reports failure through this single type; the
/// variants tell configuration mistakes, failed runs, timeouts and
/// unreadable output apart.
#[derive(Debug, Error)]
pub enum ClocError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ClocError>,
    },

    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("{0}")]
    Execution(#[from] ExecutionError),

    #[error("'{}' did not finish within {limit:?} and was terminated", program.display())]
    Timeout { program: PathBuf, limit: Duration },

    #[error("Malformed output: {0}")]
    MalformedOutput(#[from] OutputError),

    #[error("Executable resolution failed: {0}")]
    Resolution(#[from] ResolutionError),
}

pub type Result<T> = std::result::Result<T, ClocError>;

impl ClocError {
    /// Unwraps any context layers and returns the innermost error.
    pub fn root(&self) -> &ClocError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.root(), Self::Timeout { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self.root(), Self::Configuration(_))
    }

    pub fn is_malformed_output(&self) -> bool {
        matches!(self.root(), Self::MalformedOutput(_))
    }
}

/// Errors raised while configuring a command, before anything is spawned.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Unable to read: {}", path.display())]
    TargetNotFound { path: PathBuf },

    #[error("{option}: {reason}")]
    InvalidValue { option: &'static str, reason: String },

    #[error("Executable not found: {reason}")]
    ExecutableNotFound { reason: String },

    #[error("Failed to assemble invocation: {0}")]
    Invocation(String),

    #[error("Failed to parse {format} options: {details}")]
    Options { format: String, details: String },

    #[error("Failed to read options file '{}': {source}", path.display())]
    OptionsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by running the external tool.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The tool exited unsuccessfully; its standard error is the message.
    #[error("{stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("Failed to spawn '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for '{}': {source}", program.display())]
    Wait {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while turning captured standard output into a report.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("invalid JSON at line {line}, column {column}: {details}")]
    InvalidJson { line: usize, column: usize, details: String },

    #[error("Unexpected output format! {details}")]
    UnexpectedShape { details: String },
}

/// Errors raised while locating or extracting the bundled executable.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Failed to extract '{}': {source}", path.display())]
    Extraction {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to mark '{}' executable: {source}", path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for OutputError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            return Self::UnexpectedShape { details: err.to_string() };
        }
        Self::InvalidJson { line: err.line(), column: err.column(), details: err.to_string() }
    }
}

impl From<serde_json::Error> for ClocError {
    fn from(err: serde_json::Error) -> Self {
        OutputError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ConfigurationError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Options { format: "YAML".to_string(), details: err.to_string() }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ClocError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ClocError::Context { context: context.into(), source: Box::new(e.into()) })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ClocError::Context { context: f(), source: Box::new(e.into()) })
    }
}
