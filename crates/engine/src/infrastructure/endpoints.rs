//! URL construction for the PokeAPI v2 resources used by the app.

/// Default PokeAPI base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base_url: String,
}

impl ApiEndpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Category list (`/type`)
    pub fn categories(&self) -> String {
        format!("{}/type", self.base_url)
    }

    /// One category by name (`/type/{name}`)
    pub fn category(&self, name: &str) -> String {
        format!("{}/type/{}", self.base_url, name)
    }

    /// Entry index (`/pokemon?limit=N`)
    pub fn entries(&self, limit: u32) -> String {
        format!("{}/pokemon?limit={}", self.base_url, limit)
    }

    /// One entry by name or numeric id (`/pokemon/{id}`)
    pub fn entry(&self, id: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
