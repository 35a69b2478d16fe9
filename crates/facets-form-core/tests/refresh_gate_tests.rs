#![allow(clippy::unwrap_used, clippy::expect_used)]

use facets_form_core::model::{AncestorMap, Diff, FilterMap};
use facets_form_core::should_refresh;

fn ancestors() -> AncestorMap {
    AncestorMap::from_attribute("tags", r#"{"1.1": ["1"]}"#).unwrap()
}

fn added(values: &[&str]) -> Diff {
    Diff {
        added: values.iter().map(|v| v.to_string()).collect(),
        removed: Vec::new(),
    }
}

#[test]
fn test_active_ancestor_suppresses_refresh() {
    let filters: FilterMap = [("tags", vec!["1"])].into_iter().collect();
    assert!(!should_refresh(&added(&["1.1"]), Some(&ancestors()), &filters, "tags"));
}

#[test]
fn test_no_active_ancestor_requires_refresh() {
    assert!(should_refresh(&added(&["1.1"]), Some(&ancestors()), &FilterMap::new(), "tags"));
}

#[test]
fn test_empty_attribute_encodings_always_refresh() {
    let filters: FilterMap = [("tags", vec!["1"])].into_iter().collect();
    for raw in ["[]", "{}", ""] {
        let ancestors = AncestorMap::from_attribute("tags", raw).unwrap();
        assert!(should_refresh(&added(&["1.1"]), Some(&ancestors), &filters, "tags"), "{}", raw);
    }
}

#[test]
fn test_any_covered_value_suppresses_regardless_of_position() {
    let ancestors =
        AncestorMap::from_attribute("tags", r#"{"1.1": ["1"], "2.1": ["2"]}"#).unwrap();
    let filters: FilterMap = [("tags", vec!["1"])].into_iter().collect();

    // The covered value is evaluated first, then an uncovered one; the
    // uncovered one must not flip the decision back.
    assert!(!should_refresh(&added(&["1.1", "2.1"]), Some(&ancestors), &filters, "tags"));
    assert!(!should_refresh(&added(&["2.1", "1.1"]), Some(&ancestors), &filters, "tags"));
}
