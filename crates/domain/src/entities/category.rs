//! Category entity - a named grouping of catalogue entries (an elemental type)

use super::EntryReference;

/// A category as listed by the remote API. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    pub name: String,
    /// Absolute URL of the category detail resource
    pub url: String,
}

impl Category {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The expanded member list of one category, in remote order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMembers {
    pub category: Category,
    pub entries: Vec<EntryReference>,
}

impl CategoryMembers {
    pub fn new(category: Category, entries: Vec<EntryReference>) -> Self {
        Self { category, entries }
    }

    /// The first `size` entry references.
    ///
    /// Statistics are computed over this bounded prefix rather than the whole
    /// member list to cap the number of detail requests per category. The
    /// resulting figures are representative, not exact.
    pub fn sample(&self, size: usize) -> &[EntryReference] {
        let end = size.min(self.entries.len());
        &self.entries[..end]
    }

    /// Names of the first `size` members.
    pub fn sample_names(&self, size: usize) -> Vec<String> {
        self.sample(size).iter().map(|e| e.name.clone()).collect()
    }
}
