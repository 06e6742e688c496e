//! PokeAPI v2 client
//!
//! Implements [`CatalogPort`] with one GET per call. No retries: a failed
//! request is reported to the caller as a [`CatalogError`].

use std::time::Duration;

use pokedex_domain::{Category, CategoryMembers, EntryDetail, EntryReference, EntrySummary};
use pokedex_shared::{CategoryResponse, EntryResponse, NamedResourceList};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::endpoints::ApiEndpoints;
use super::ports::{CatalogError, CatalogPort};
use super::settings::CatalogSettings;

/// Client for the public PokeAPI
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    endpoints: ApiEndpoints,
}

impl PokeApiClient {
    pub fn new(settings: &CatalogSettings) -> Self {
        Self::with_timeout(settings.endpoints(), settings.request_timeout())
    }

    /// Create client with custom endpoints and timeout (for testing).
    pub fn with_timeout(endpoints: ApiEndpoints, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, CatalogError> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Catalogue request rejected");
            return Err(CatalogError::status(url, status.as_u16()));
        }

        let body = response.text().await.map_err(|e| classify(&url, e))?;
        serde_json::from_str(&body).map_err(|e| CatalogError::invalid_response(url, e))
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(&CatalogSettings::default())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

// The browser fetch API owns timeouts on wasm.
#[cfg(target_arch = "wasm32")]
fn build_client(_timeout: Duration) -> Client {
    Client::new()
}

fn classify(url: &str, error: reqwest::Error) -> CatalogError {
    if error.is_timeout() {
        CatalogError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_decode() {
        CatalogError::invalid_response(url, error)
    } else {
        CatalogError::request(url, error)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl CatalogPort for PokeApiClient {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let list: NamedResourceList = self.get_json(self.endpoints.categories()).await?;
        Ok(list.into_categories())
    }

    async fn list_entries(&self, limit: u32) -> Result<Vec<EntrySummary>, CatalogError> {
        let list: NamedResourceList = self.get_json(self.endpoints.entries(limit)).await?;
        Ok(list.into_summaries())
    }

    async fn category_members(&self, category: &Category) -> Result<CategoryMembers, CatalogError> {
        let url = if category.url.is_empty() {
            self.endpoints.category(&category.name)
        } else {
            category.url.clone()
        };
        let response: CategoryResponse = self.get_json(url).await?;
        Ok(response.into_members(category.clone()))
    }

    async fn entry_detail(&self, entry: &EntryReference) -> Result<EntryDetail, CatalogError> {
        let url = if entry.url.is_empty() {
            self.endpoints.entry(&entry.name)
        } else {
            entry.url.clone()
        };
        let response: EntryResponse = self.get_json(url).await?;
        Ok(response.into())
    }
}
