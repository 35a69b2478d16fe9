#![allow(clippy::unwrap_used, clippy::expect_used)]

use facets_form_core::model::{normalize_values, WidgetRef};
use facets_form_core::FilterStore;
use proptest::prelude::*;
use std::collections::HashSet;

fn update() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        prop::sample::select(vec!["tags", "type", "created"]).prop_map(str::to_string),
        prop::collection::vec("[a-c0-2]{0,2}", 0..6),
    )
}

proptest! {
    #[test]
    fn no_facet_ever_maps_to_empty_list(updates in prop::collection::vec(update(), 1..20)) {
        let mut store = FilterStore::new("search_api:s");
        for (facet, values) in updates {
            store.set_filters(&facet, values, &WidgetRef::new(facet.as_str(), "facets_form_checkbox"), false);
            for (_, values) in store.all().iter() {
                prop_assert!(!values.is_empty());
                prop_assert!(values.iter().all(|v| !v.is_empty()));
            }
        }
    }

    #[test]
    fn diff_accounts_for_every_change(
        before in prop::collection::vec("[a-c0-2]{0,2}", 0..6),
        after in prop::collection::vec("[a-c0-2]{0,2}", 0..6),
    ) {
        let widget = WidgetRef::new("tags", "facets_form_checkbox");
        let mut store = FilterStore::new("search_api:s");
        store.set_filters("tags", before, &widget, false);
        let existing: HashSet<String> = store.all().get("tags").iter().cloned().collect();

        let diff = store.set_filters("tags", after.clone(), &widget, false);

        let added: HashSet<_> = diff.added.iter().cloned().collect();
        let removed: HashSet<_> = diff.removed.iter().cloned().collect();
        prop_assert!(added.is_disjoint(&removed));

        let expected: HashSet<String> = normalize_values(after).into_iter().collect();
        let rebuilt: HashSet<String> = existing
            .union(&added)
            .filter(|v| !removed.contains(*v))
            .cloned()
            .collect();
        prop_assert_eq!(rebuilt, expected);
    }

    #[test]
    fn repeating_an_update_is_a_no_op(
        (facet, values) in update(),
        seed in prop::collection::vec(update(), 0..5),
    ) {
        let widget = WidgetRef::new(facet.as_str(), "facets_form_checkbox");
        let mut store = FilterStore::new("search_api:s");
        for (f, v) in seed {
            store.set_filters(&f, v, &widget, false);
        }
        store.set_filters(&facet, values.clone(), &widget, false);
        let before = store.all().clone();

        let diff = store.set_filters(&facet, values, &widget, false);
        prop_assert!(diff.is_empty());
        prop_assert_eq!(store.all(), &before);
    }

    #[test]
    fn stored_values_keep_first_occurrence_order(values in prop::collection::vec("[a-c0-2]{0,2}", 0..8)) {
        let mut store = FilterStore::new("search_api:s");
        store.set_filters("tags", values.clone(), &WidgetRef::new("tags", "facets_form_checkbox"), false);

        let mut seen = HashSet::new();
        let expected: Vec<String> = values
            .into_iter()
            .filter(|v| !v.is_empty() && seen.insert(v.clone()))
            .collect();
        prop_assert_eq!(store.all().get("tags"), expected.as_slice());
    }
}
