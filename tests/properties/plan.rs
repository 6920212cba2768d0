//! Property tests for the reconciliation diff.

use std::collections::BTreeSet;

use proptest::prelude::*;

use envsync::ReconcilePlan;

fn name_set() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("[a-z]{1,8}", 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identical desired and current sets produce an empty plan.
    #[test]
    fn property_equal_sets_are_a_noop(set in name_set()) {
        let plan = ReconcilePlan::compute(&set, &set, &BTreeSet::new());
        prop_assert!(plan.is_noop());
    }

    /// PROPERTY: when desired covers current, the plan only adds, and adds
    /// exactly the difference minus the never-add names.
    #[test]
    fn property_desired_superset_only_adds(
        current in name_set(),
        extra in name_set(),
        never_add in name_set(),
    ) {
        let desired: BTreeSet<String> = current.union(&extra).cloned().collect();
        let plan = ReconcilePlan::compute(&desired, &current, &never_add);

        let expected: BTreeSet<String> = desired
            .difference(&current)
            .filter(|name| !never_add.contains(*name))
            .cloned()
            .collect();
        prop_assert_eq!(plan.to_add, expected);
        prop_assert!(plan.to_remove.is_empty());
    }

    /// PROPERTY: when current covers desired, the plan only removes, and
    /// removes exactly the difference.
    #[test]
    fn property_current_superset_only_removes(
        desired in name_set(),
        extra in name_set(),
    ) {
        let current: BTreeSet<String> = desired.union(&extra).cloned().collect();
        let plan = ReconcilePlan::compute(&desired, &current, &BTreeSet::new());

        let expected: BTreeSet<String> =
            current.difference(&desired).cloned().collect();
        prop_assert!(plan.to_add.is_empty());
        prop_assert_eq!(plan.to_remove, expected);
    }

    /// PROPERTY: the add-set and remove-set never overlap, and never-add
    /// names never appear in the add-set.
    #[test]
    fn property_plan_sets_are_disjoint_and_filtered(
        desired in name_set(),
        current in name_set(),
        never_add in name_set(),
    ) {
        let plan = ReconcilePlan::compute(&desired, &current, &never_add);

        prop_assert!(plan.to_add.is_disjoint(&plan.to_remove));
        prop_assert!(plan.to_add.is_disjoint(&never_add));
        for name in &plan.to_add {
            prop_assert!(desired.contains(name) && !current.contains(name));
        }
        for name in &plan.to_remove {
            prop_assert!(current.contains(name) && !desired.contains(name));
        }
    }
}
