//! Run reporter
//!
//! Progress goes to stdout and only when verbose; warnings always go to
//! stderr as CI annotations.

use std::collections::BTreeSet;

use crate::domain::RefusalRecord;
use crate::ui::ci::warning_annotation;

/// Reporter for one sync or force-delete run
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Per-operation progress message, suppressed unless verbose
    pub fn progress(&self, message: &str) {
        if self.verbose {
            println!("{}", message);
        }
    }

    /// Warn that the remove-set hit the protected list
    pub fn warn_protected(&self, protected: &BTreeSet<String>) {
        let names: Vec<&str> = protected.iter().map(String::as_str).collect();
        let message = format!(
            "Since we tried to delete a protected environment ({}), \
             a human should examine the situation.",
            names.join(", ")
        );
        eprintln!("{}", warning_annotation(&message, None));
    }

    /// Report every refused deletion, one annotation per environment
    pub fn warn_refusals(&self, record: &RefusalRecord) {
        for refusal in record.iter() {
            let message = format!(
                "Refused to delete {} environment because it is still used by these hosts:\n{}",
                refusal.environment,
                refusal.hosts.join("\n")
            );
            eprintln!(
                "{}",
                warning_annotation(&message, Some("Attempted to Delete Environment with Hosts"))
            );
        }
    }
}
