//! Shared test helpers for catalogue use cases.
//!
//! Builders for domain values plus [`DelayedCatalog`], a hand-written
//! [`CatalogPort`] whose category expansions resolve after a configured delay.
//! Use it when a test depends on completion order; use `MockCatalogPort`
//! everywhere else.

use std::time::Duration;

use pokedex_domain::{Category, CategoryMembers, EntryDetail, EntryReference, EntrySummary};

use crate::infrastructure::ports::{CatalogError, CatalogPort};

/// Detail record with the given abilities.
pub fn detail(name: &str, base_experience: u32, abilities: &[&str]) -> EntryDetail {
    EntryDetail::new(name, base_experience).with_abilities(abilities.iter().copied())
}

/// Member list whose references point at `pokemon/{name}`.
pub fn members(category: &Category, names: &[&str]) -> CategoryMembers {
    let entries = names
        .iter()
        .map(|name| EntryReference::new(*name, format!("pokemon/{name}")))
        .collect();
    CategoryMembers::new(category.clone(), entries)
}

/// Search index entries pointing at `pokemon/{name}`.
pub fn summaries(names: &[&str]) -> Vec<EntrySummary> {
    names
        .iter()
        .map(|name| EntrySummary::new(*name, format!("pokemon/{name}")))
        .collect()
}

/// In-memory catalogue with per-category expansion latency.
#[derive(Default)]
pub struct DelayedCatalog {
    categories: Vec<(Category, Duration, Vec<EntryDetail>)>,
}

impl DelayedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category whose expansion resolves after `delay`.
    pub fn with_category(mut self, name: &str, delay: Duration, entries: Vec<EntryDetail>) -> Self {
        self.categories
            .push((Category::new(name, format!("type/{name}")), delay, entries));
        self
    }
}

#[async_trait::async_trait]
impl CatalogPort for DelayedCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.iter().map(|(c, _, _)| c.clone()).collect())
    }

    async fn list_entries(&self, limit: u32) -> Result<Vec<EntrySummary>, CatalogError> {
        Ok(self
            .categories
            .iter()
            .flat_map(|(_, _, entries)| entries)
            .map(|d| EntrySummary::new(d.name.clone(), format!("pokemon/{}", d.name)))
            .take(limit as usize)
            .collect())
    }

    async fn category_members(&self, category: &Category) -> Result<CategoryMembers, CatalogError> {
        let (_, delay, entries) = self
            .categories
            .iter()
            .find(|(c, _, _)| c.name == category.name)
            .ok_or_else(|| CatalogError::status(category.url.clone(), 404))?;

        tokio::time::sleep(*delay).await;

        let names: Vec<&str> = entries.iter().map(|d| d.name.as_str()).collect();
        Ok(members(category, &names))
    }

    async fn entry_detail(&self, entry: &EntryReference) -> Result<EntryDetail, CatalogError> {
        self.categories
            .iter()
            .flat_map(|(_, _, entries)| entries)
            .find(|d| d.name == entry.name)
            .cloned()
            .ok_or_else(|| CatalogError::status(entry.url.clone(), 404))
    }
}
