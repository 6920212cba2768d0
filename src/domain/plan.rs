//! Reconciliation plan
//!
//! The diff between the desired and current environment sets. This is a
//! pure computation over sets; `BTreeSet` keeps iteration order
//! deterministic so runs are reproducible and testable.

use std::collections::BTreeSet;

/// The add/remove sets computed for one reconciliation run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReconcilePlan {
    /// Environments in the desired set but not yet registered
    pub to_add: BTreeSet<String>,
    /// Registered environments absent from the desired set
    pub to_remove: BTreeSet<String>,
}

impl ReconcilePlan {
    /// Compute the plan from a desired and current snapshot.
    ///
    /// Names in `never_add` are excluded from the add-set even when the
    /// desired set asks for them. The remove-set is not filtered here;
    /// protected names are handled by the guard so that a protected name
    /// in the remove-set aborts the run instead of being skipped silently.
    pub fn compute(
        desired: &BTreeSet<String>,
        current: &BTreeSet<String>,
        never_add: &BTreeSet<String>,
    ) -> Self {
        let to_add = desired
            .difference(current)
            .filter(|name| !never_add.contains(*name))
            .cloned()
            .collect();
        let to_remove = current.difference(desired).cloned().collect();

        Self { to_add, to_remove }
    }

    /// True when the current state already matches the desired state
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identical_sets_produce_empty_plan() {
        let plan = ReconcilePlan::compute(
            &names(&["production"]),
            &names(&["production"]),
            &BTreeSet::new(),
        );
        assert!(plan.is_noop());
    }

    #[test]
    fn missing_environment_lands_in_add_set() {
        let plan = ReconcilePlan::compute(
            &names(&["production", "development"]),
            &names(&["production"]),
            &BTreeSet::new(),
        );
        assert_eq!(plan.to_add, names(&["development"]));
        assert!(plan.to_remove.is_empty());
    }

    #[test]
    fn extra_environment_lands_in_remove_set() {
        let plan = ReconcilePlan::compute(
            &names(&["production"]),
            &names(&["production", "development"]),
            &BTreeSet::new(),
        );
        assert!(plan.to_add.is_empty());
        assert_eq!(plan.to_remove, names(&["development"]));
    }

    #[test]
    fn never_add_names_are_filtered_from_add_set() {
        let plan = ReconcilePlan::compute(
            &names(&["production", "gh-pages"]),
            &names(&["production"]),
            &names(&["gh-pages"]),
        );
        assert!(plan.is_noop());
    }

    #[test]
    fn never_add_does_not_shield_remove_set() {
        // A never-add name that exists and is no longer desired still gets
        // scheduled for removal.
        let plan = ReconcilePlan::compute(
            &names(&["production"]),
            &names(&["production", "gh-pages"]),
            &names(&["gh-pages"]),
        );
        assert_eq!(plan.to_remove, names(&["gh-pages"]));
    }
}
