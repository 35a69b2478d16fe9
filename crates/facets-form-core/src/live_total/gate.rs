use crate::model::{AncestorMap, Diff, FilterMap};

/// Whether a change can move the result count.
///
/// Selecting an ancestor already includes its descendants, so toggling a
/// value while one of its ancestors is active for the same facet changes
/// nothing. Any such value in the diff suppresses the refresh; later values
/// never re-enable it. A widget without ancestors always refreshes.
pub fn should_refresh(
    diff: &Diff,
    ancestors: Option<&AncestorMap>,
    filters: &FilterMap,
    facet: &str,
) -> bool {
    let Some(ancestors) = ancestors.filter(|a| !a.is_empty()) else {
        return true;
    };

    let covered = diff.changed().any(|value| {
        ancestors
            .ancestors_of(value)
            .iter()
            .any(|ancestor| filters.is_active(facet, ancestor))
    });
    !covered
}
