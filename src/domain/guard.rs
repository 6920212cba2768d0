//! Protection guard
//!
//! Pure predicate over the remove-set. A non-empty intersection with the
//! protected set fails the whole run before any mutating hammer call is
//! issued; the caller decides how to surface the violation.

use std::collections::BTreeSet;

use crate::error::{EnvsyncError, EnvsyncResult};

/// Check a remove-set against the protected set.
///
/// Returns `ProtectedEnvironment` carrying the offending names (sorted)
/// when the intersection is non-empty.
pub fn check_protected(
    to_remove: &BTreeSet<String>,
    protected: &BTreeSet<String>,
) -> EnvsyncResult<()> {
    let offending: Vec<String> = to_remove.intersection(protected).cloned().collect();
    if offending.is_empty() {
        Ok(())
    } else {
        Err(EnvsyncError::ProtectedEnvironment { names: offending })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_intersection_passes() {
        assert!(check_protected(&names(&["development"]), &names(&["production"])).is_ok());
    }

    #[test]
    fn protected_name_in_remove_set_fails() {
        let err = check_protected(
            &names(&["development", "production"]),
            &names(&["production"]),
        )
        .unwrap_err();
        match err {
            EnvsyncError::ProtectedEnvironment { names } => {
                assert_eq!(names, vec!["production".to_string()]);
            }
            other => panic!("expected ProtectedEnvironment, got {other:?}"),
        }
    }

    #[test]
    fn empty_remove_set_always_passes() {
        assert!(check_protected(&BTreeSet::new(), &names(&["production"])).is_ok());
    }
}
