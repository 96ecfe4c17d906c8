//! Provider directory: reference dataset, CSV import, faceted search and pagination.

mod builtin;
mod directory;
pub mod domain;
mod import;
pub mod search;

#[cfg(test)]
mod tests;

pub use directory::ProviderDirectory;
pub use domain::{Provider, ProviderContact, ProviderGender, ProviderType};
pub use import::ProviderImportError;
pub use search::{paginate, search, FilterCriteria, Page, ProviderSearch};
