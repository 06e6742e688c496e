//! Search use case: entry index, name filtering and card details.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::join_all;
use pokedex_domain::{
    filter_by_name, EntryDetail, EntrySummary, ENTRY_INDEX_LIMIT, SEARCH_RESULT_LIMIT,
};

use crate::infrastructure::ports::{CatalogError, CatalogPort};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Failed to load Pokémon list. Please try again later.")]
    IndexFetch(#[source] CatalogError),
}

pub struct SearchEntries {
    catalog: Arc<dyn CatalogPort>,
}

impl SearchEntries {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// Fetch the entry index the search box filters over.
    pub async fn load_index(&self) -> Result<Vec<EntrySummary>, SearchError> {
        let index = self
            .catalog
            .list_entries(ENTRY_INDEX_LIMIT)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch entry index");
                SearchError::IndexFetch(e)
            })?;

        tracing::debug!(entries = index.len(), "Entry index loaded");
        Ok(index)
    }

    /// Entries shown for `query`.
    pub fn visible(index: &[EntrySummary], query: &str) -> Vec<EntrySummary> {
        filter_by_name(index, query, SEARCH_RESULT_LIMIT)
    }

    /// Fetch details for visible entries not in `known`, concurrently.
    ///
    /// Returns only the newly fetched records keyed by entry name. An entry
    /// whose fetch fails is logged and left out; its card is simply not shown.
    pub async fn fetch_missing_details(
        &self,
        visible: &[EntrySummary],
        known: &HashMap<String, EntryDetail>,
    ) -> HashMap<String, EntryDetail> {
        let missing: Vec<&EntrySummary> = visible
            .iter()
            .filter(|entry| !known.contains_key(&entry.name))
            .collect();

        if missing.is_empty() {
            return HashMap::new();
        }

        let results = join_all(missing.iter().map(|entry| async move {
            let reference = entry.as_reference();
            (entry.name.clone(), self.catalog.entry_detail(&reference).await)
        }))
        .await;

        results
            .into_iter()
            .filter_map(|(name, result)| match result {
                Ok(detail) => Some((name, detail)),
                Err(e) => {
                    tracing::warn!(entry = %name, error = %e, "Failed to fetch details");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCatalogPort;
    use crate::test_fixtures::{detail, summaries};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn loads_index_with_fixed_limit() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_list_entries()
            .with(eq(ENTRY_INDEX_LIMIT))
            .times(1)
            .returning(|_| Ok(summaries(&["bulbasaur", "ivysaur"])));

        let index = SearchEntries::new(Arc::new(catalog))
            .load_index()
            .await
            .expect("index");

        assert_eq!(index.len(), 2);
    }

    #[tokio::test]
    async fn index_failure_surfaces_user_message() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_list_entries()
            .returning(|_| Err(CatalogError::status("/pokemon?limit=1000", 503)));

        let err = SearchEntries::new(Arc::new(catalog))
            .load_index()
            .await
            .expect_err("should fail");

        assert_eq!(
            err.to_string(),
            "Failed to load Pokémon list. Please try again later."
        );
    }

    #[test]
    fn visible_caps_results() {
        let names: Vec<String> = (0..30).map(|i| format!("mon-{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let index = summaries(&refs);

        assert_eq!(SearchEntries::visible(&index, "").len(), SEARCH_RESULT_LIMIT);
        assert_eq!(SearchEntries::visible(&index, "MON-2").len(), 11);
    }

    #[tokio::test]
    async fn fetches_only_unknown_details() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_entry_detail()
            .withf(|entry| entry.name == "pichu")
            .times(1)
            .returning(|_| Ok(detail("pichu", 41, &["static"])));

        let mut known = HashMap::new();
        known.insert("pikachu".to_string(), detail("pikachu", 112, &["static"]));

        let fetched = SearchEntries::new(Arc::new(catalog))
            .fetch_missing_details(&summaries(&["pikachu", "pichu"]), &known)
            .await;

        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched["pichu"].base_experience, 41);
    }

    #[tokio::test]
    async fn failed_detail_is_skipped() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_entry_detail()
            .returning(|entry| match entry.name.as_str() {
                "raichu" => Err(CatalogError::status(entry.url.clone(), 500)),
                _ => Ok(detail(&entry.name, 100, &[])),
            });

        let fetched = SearchEntries::new(Arc::new(catalog))
            .fetch_missing_details(&summaries(&["pikachu", "raichu"]), &HashMap::new())
            .await;

        assert!(fetched.contains_key("pikachu"));
        assert!(!fetched.contains_key("raichu"));
    }

    #[tokio::test]
    async fn nothing_missing_means_no_requests() {
        let mut catalog = MockCatalogPort::new();
        catalog.expect_entry_detail().never();

        let mut known = HashMap::new();
        known.insert("eevee".to_string(), detail("eevee", 65, &[]));

        let fetched = SearchEntries::new(Arc::new(catalog))
            .fetch_missing_details(&summaries(&["eevee"]), &known)
            .await;

        assert!(fetched.is_empty());
    }
}
