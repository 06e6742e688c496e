//! Port traits for infrastructure boundaries.
//!
//! The remote catalogue is the only external dependency, so there is a single
//! port. Use cases depend on it as `Arc<dyn CatalogPort>`.

mod catalog;
mod error;

pub use catalog::CatalogPort;
pub use error::CatalogError;

#[cfg(test)]
pub use catalog::MockCatalogPort;
