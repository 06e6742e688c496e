//! Related entries for the detail page.

use std::collections::HashSet;

/// Members taken from each of an entry's types when listing related entries.
pub const RELATED_SAMPLE_SIZE: usize = 5;

/// Flatten per-type member name lists into one list.
///
/// Keeps the first occurrence of each name, preserves group order, and leaves
/// out `subject` (the entry the page is about).
pub fn merge_related(subject: &str, groups: Vec<Vec<String>>) -> Vec<String> {
    let mut seen = HashSet::new();
    groups
        .into_iter()
        .flatten()
        .filter(|name| name != subject)
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn deduplicates_across_types_keeping_first_seen_order() {
        let merged = merge_related(
            "bulbasaur",
            vec![
                names(&["bulbasaur", "ivysaur", "oddish"]),
                names(&["oddish", "zubat", "ivysaur"]),
            ],
        );
        assert_eq!(merged, names(&["ivysaur", "oddish", "zubat"]));
    }

    #[test]
    fn no_groups_is_empty() {
        assert!(merge_related("mew", Vec::new()).is_empty());
    }
}
