//! GitHub Actions workflow commands
//!
//! The sync runs inside CI, so warnings are emitted as `::warning::`
//! annotations that the runner surfaces on the workflow summary.

/// Render a warning annotation with an optional title.
///
/// Newlines in the message are percent-escaped so multi-line content (like
/// a host list) survives the single-line workflow command format.
pub fn warning_annotation(message: &str, title: Option<&str>) -> String {
    match title {
        Some(title) => format!(
            "::warning title={}::{}",
            escape_workflow_command_value(title),
            escape_workflow_command_value(message)
        ),
        None => format!("::warning::{}", escape_workflow_command_value(message)),
    }
}

fn escape_workflow_command_value(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
