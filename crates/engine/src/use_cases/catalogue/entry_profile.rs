//! Entry profile lookup for the detail page.

use std::sync::Arc;

use futures_util::future::join_all;
use pokedex_domain::{
    merge_related, Category, EntryDetail, EntryIdentifier, EntryReference, RELATED_SAMPLE_SIZE,
};

use crate::infrastructure::ports::{CatalogError, CatalogPort};

/// An entry with the names of entries sharing one of its types.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryProfile {
    pub detail: EntryDetail,
    pub related: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryLookupError {
    #[error("Pokémon not found: {0}")]
    NotFound(String),
    #[error("Failed to fetch data for {id}")]
    Fetch {
        id: String,
        #[source]
        source: CatalogError,
    },
}

pub struct EntryProfileLookup {
    catalog: Arc<dyn CatalogPort>,
}

impl EntryProfileLookup {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self, id: &EntryIdentifier) -> Result<EntryProfile, EntryLookupError> {
        let reference = EntryReference::new(id.as_str(), "");
        let detail = self
            .catalog
            .entry_detail(&reference)
            .await
            .map_err(|source| {
                if source.is_not_found() {
                    tracing::debug!(id = %id, "Entry not found");
                    EntryLookupError::NotFound(id.to_string())
                } else {
                    tracing::warn!(id = %id, error = %source, "Entry lookup failed");
                    EntryLookupError::Fetch {
                        id: id.to_string(),
                        source,
                    }
                }
            })?;

        let related = self.related_names(&detail).await;

        Ok(EntryProfile { detail, related })
    }

    /// First members of each of the entry's types, merged. A type whose
    /// lookup fails contributes nothing.
    async fn related_names(&self, detail: &EntryDetail) -> Vec<String> {
        let categories: Vec<Category> = detail
            .types
            .iter()
            .map(|name| Category::new(name.clone(), ""))
            .collect();

        let results = join_all(categories.iter().map(|c| self.catalog.category_members(c))).await;

        let groups = categories
            .iter()
            .zip(results)
            .filter_map(|(category, result)| match result {
                Ok(members) => Some(members.sample_names(RELATED_SAMPLE_SIZE)),
                Err(e) => {
                    tracing::warn!(
                        entry = %detail.name,
                        category = %category.name,
                        error = %e,
                        "Skipping related entries for type"
                    );
                    None
                }
            })
            .collect();

        merge_related(&detail.name, groups)
    }
}
