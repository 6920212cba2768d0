//! Console output
//!
//! Diagnostics are split by severity: progress messages on stdout (only
//! when verbose), warnings as GitHub Actions workflow commands on stderr,
//! fatal errors via the CLI boundary.

pub mod ci;
pub mod output;

pub use output::Reporter;
