//! Name search over the entry index.

use crate::entities::EntrySummary;

/// How many entries are requested for the search index.
pub const ENTRY_INDEX_LIMIT: u32 = 1000;

/// How many matches the search view shows at once.
pub const SEARCH_RESULT_LIMIT: usize = 20;

/// Entries whose name contains `query` (case-insensitive), in index order,
/// truncated to `limit`. An empty query matches everything.
pub fn filter_by_name(entries: &[EntrySummary], query: &str, limit: usize) -> Vec<EntrySummary> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(names: &[&str]) -> Vec<EntrySummary> {
        names
            .iter()
            .map(|n| EntrySummary::new(*n, format!("https://api/pokemon/{n}/")))
            .collect()
    }

    #[test]
    fn matches_substrings_ignoring_case() {
        let idx = index(&["pikachu", "raichu", "bulbasaur", "Pichu"]);
        let names: Vec<String> = filter_by_name(&idx, "CHU", 20)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["pikachu", "raichu", "Pichu"]);
    }

    #[test]
    fn empty_query_returns_first_entries_up_to_limit() {
        let names: Vec<String> = (0..30).map(|i| format!("mon-{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let result = filter_by_name(&index(&refs), "", SEARCH_RESULT_LIMIT);
        assert_eq!(result.len(), SEARCH_RESULT_LIMIT);
        assert_eq!(result[0].name, "mon-0");
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_by_name(&index(&["eevee"]), "zz", 20).is_empty());
    }
}
