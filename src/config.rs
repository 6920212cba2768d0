//! Configuration for a sync run
//!
//! All configuration is passed explicitly into each operation; there is no
//! process-wide state. Defaults match the policy the CI pipelines rely on:
//! `production` is never deleted automatically, `gh-pages` is never created
//! automatically (it shows up in desired lists derived from git branches).

use std::collections::BTreeSet;

/// Configuration for sync and force-delete operations
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Foreman location id to scope hammer queries to
    pub location_id: Option<u64>,
    /// Foreman organization id to scope hammer queries to
    pub organization_id: Option<u64>,
    /// Environments that must never be removed by reconciliation
    pub protected_environments: BTreeSet<String>,
    /// Environments that must never be created by reconciliation
    pub never_add_environments: BTreeSet<String>,
    /// Emit per-operation progress messages
    pub verbose: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            location_id: None,
            organization_id: None,
            protected_environments: BTreeSet::from(["production".to_string()]),
            never_add_environments: BTreeSet::from(["gh-pages".to_string()]),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_protects_production() {
        let config = SyncConfig::default();
        assert!(config.protected_environments.contains("production"));
        assert_eq!(config.protected_environments.len(), 1);
    }

    #[test]
    fn default_never_adds_gh_pages() {
        let config = SyncConfig::default();
        assert!(config.never_add_environments.contains("gh-pages"));
        assert_eq!(config.never_add_environments.len(), 1);
    }
}
