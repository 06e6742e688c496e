//! Catalogue port - read-only access to the remote creature database.

use pokedex_domain::{Category, CategoryMembers, EntryDetail, EntryReference, EntrySummary};

use super::error::CatalogError;

/// Read-only catalogue access. Every method is one GET request.
///
/// Futures are `Send` on native targets; in the browser they run on the
/// single-threaded event loop and are not.
#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait CatalogPort: Send + Sync {
    /// Every category, in remote order.
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// The first `limit` entries of the full entry index.
    async fn list_entries(&self, limit: u32) -> Result<Vec<EntrySummary>, CatalogError>;

    /// Expand a category into its member references.
    async fn category_members(&self, category: &Category) -> Result<CategoryMembers, CatalogError>;

    /// Full detail record of one entry.
    async fn entry_detail(&self, entry: &EntryReference) -> Result<EntryDetail, CatalogError>;
}
