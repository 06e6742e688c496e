//! Category statistics pipeline.
//!
//! Category list -> category members -> sampled entry details -> one
//! [`CategoryStatistic`] per category. Categories are expanded concurrently and
//! the detail fetches inside each category run concurrently too. Both joins
//! preserve input order, so the output follows the category list order no
//! matter which branch resolves first.

use std::sync::Arc;

use futures_util::future::join_all;
use pokedex_domain::{aggregate_category, Category, CategoryStatistic, STATS_SAMPLE_SIZE};

use crate::infrastructure::ports::{CatalogError, CatalogPort};

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsReport {
    /// One statistic per category that could be expanded, in category list order
    pub statistics: Vec<CategoryStatistic>,
    /// Contained leaf failures (categories dropped, entries excluded)
    pub failures: Vec<PipelineError>,
}

impl StatsReport {
    /// Names of categories omitted because their expansion failed.
    pub fn dropped_categories(&self) -> Vec<&str> {
        self.failures
            .iter()
            .filter_map(|failure| match failure {
                PipelineError::CategoryFetch { category, .. } => Some(category.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of entries excluded from their category's sample.
    pub fn excluded_entries(&self) -> usize {
        self.failures
            .iter()
            .filter(|failure| matches!(failure, PipelineError::DetailFetch { .. }))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// Root failure. Nothing can be shown.
    #[error("Failed to fetch Pokémon types")]
    ListFetch(#[source] CatalogError),

    /// The category is dropped from the output.
    #[error("Failed to fetch data for {category}")]
    CategoryFetch {
        category: String,
        #[source]
        source: CatalogError,
    },

    /// The entry is excluded from its category's sample.
    #[error("Failed to fetch Pokémon data for {category} ({entry})")]
    DetailFetch {
        category: String,
        entry: String,
        #[source]
        source: CatalogError,
    },
}

/// Computes per-category statistics from the remote catalogue.
pub struct CategoryStatsPipeline {
    catalog: Arc<dyn CatalogPort>,
    sample_size: usize,
}

impl CategoryStatsPipeline {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            catalog,
            sample_size: STATS_SAMPLE_SIZE,
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Run the pipeline once.
    ///
    /// Fails only when the category list itself cannot be fetched. Category
    /// and entry failures are logged and collected in [`StatsReport::failures`].
    pub async fn execute(&self) -> Result<StatsReport, PipelineError> {
        let categories = self.catalog.list_categories().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch category list");
            PipelineError::ListFetch(e)
        })?;

        tracing::debug!(count = categories.len(), "Expanding categories");

        let branches = join_all(categories.iter().map(|c| self.category_branch(c))).await;

        let mut report = StatsReport::default();
        for branch in branches {
            match branch {
                Ok((statistic, excluded)) => {
                    report.statistics.push(statistic);
                    report.failures.extend(excluded);
                }
                Err(failure) => report.failures.push(failure),
            }
        }

        tracing::info!(
            statistics = report.statistics.len(),
            failures = report.failures.len(),
            "Category statistics computed"
        );

        Ok(report)
    }

    /// Expand one category and aggregate its sample. Detail failures shrink
    /// the sample and are returned alongside the statistic.
    async fn category_branch(
        &self,
        category: &Category,
    ) -> Result<(CategoryStatistic, Vec<PipelineError>), PipelineError> {
        let members = self
            .catalog
            .category_members(category)
            .await
            .map_err(|source| {
                tracing::warn!(
                    category = %category.name,
                    error = %source,
                    "Dropping category: expansion failed"
                );
                PipelineError::CategoryFetch {
                    category: category.name.clone(),
                    source,
                }
            })?;

        let sample = members.sample(self.sample_size);
        let results = join_all(sample.iter().map(|entry| self.catalog.entry_detail(entry))).await;

        let mut details = Vec::with_capacity(results.len());
        let mut excluded = Vec::new();
        for (entry, result) in sample.iter().zip(results) {
            match result {
                Ok(detail) => details.push(detail),
                Err(source) => {
                    tracing::warn!(
                        category = %category.name,
                        entry = %entry.name,
                        error = %source,
                        "Excluding entry from sample: detail fetch failed"
                    );
                    excluded.push(PipelineError::DetailFetch {
                        category: category.name.clone(),
                        entry: entry.name.clone(),
                        source,
                    });
                }
            }
        }

        Ok((aggregate_category(&category.name, &details), excluded))
    }
}
