//! Error types for envsync
//!
//! Uses `thiserror` for library errors; the CLI boundary wraps these
//! with `anyhow` for display.

use thiserror::Error;

/// Result type alias for envsync operations
pub type EnvsyncResult<T> = Result<T, EnvsyncError>;

/// Main error type for envsync operations
#[derive(Error, Debug)]
pub enum EnvsyncError {
    /// A hammer invocation exited non-zero
    #[error("hammer {command} failed: {stderr}")]
    ExternalCommand { command: String, stderr: String },

    /// The computed remove-set intersects the protected set
    #[error("cannot delete protected environment(s): {}", names.join(", "))]
    ProtectedEnvironment { names: Vec<String> },

    /// Invalid desired-state input at the boundary
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// IO error (spawning hammer, reading the input file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error (hammer output or desired-environments file)
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
