//! Deletion refusals
//!
//! A refusal is a soft outcome, not an error: an environment scheduled for
//! removal that still has hosts assigned is skipped and recorded, and the
//! rest of the batch proceeds. The record is built once per run and handed
//! to reporting by value.

/// One refused deletion: the environment and the hosts blocking it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refusal {
    /// Environment that was scheduled for removal
    pub environment: String,
    /// Hosts still assigned to it; never empty
    pub hosts: Vec<String>,
}

/// All refusals collected during one reconciliation run, in the order the
/// remove-set was processed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefusalRecord {
    refusals: Vec<Refusal>,
}

impl RefusalRecord {
    /// Record a refused deletion
    pub fn push(&mut self, environment: String, hosts: Vec<String>) {
        debug_assert!(!hosts.is_empty(), "a refusal always has blocking hosts");
        self.refusals.push(Refusal { environment, hosts });
    }

    pub fn is_empty(&self) -> bool {
        self.refusals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.refusals.len()
    }

    /// Iterate refusals in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Refusal> {
        self.refusals.iter()
    }
}
