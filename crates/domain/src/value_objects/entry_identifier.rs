//! Validated entry identifier used by routing and the detail lookup

use std::fmt;

use crate::error::DomainError;

/// An entry name or numeric id as it appears in `/pokemon/{id}` paths.
///
/// Trimmed and lower-cased on construction; the remote API only resolves
/// lower-case names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryIdentifier(String);

impl EntryIdentifier {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the identifier is empty after
    /// trimming or contains a path separator.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Entry identifier cannot be empty"));
        }
        if trimmed.contains('/') {
            return Err(DomainError::validation(format!(
                "Entry identifier cannot contain '/': {trimmed}"
            )));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EntryIdentifier {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
