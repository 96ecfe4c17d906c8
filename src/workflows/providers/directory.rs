use std::collections::{BTreeSet, HashSet};
use std::io::Read;
use std::path::Path;

use tracing::info;

use super::builtin;
use super::domain::Provider;
use super::import::{parse_providers, ProviderImportError};

/// Fixed provider dataset. Entries keep the order they were loaded in.
#[derive(Debug, Clone)]
pub struct ProviderDirectory {
    providers: Vec<Provider>,
}

impl ProviderDirectory {
    pub fn builtin() -> Self {
        Self {
            providers: builtin::providers(),
        }
    }

    pub fn from_providers(providers: Vec<Provider>) -> Result<Self, ProviderImportError> {
        let mut seen = HashSet::new();
        for provider in &providers {
            if !seen.insert(provider.id.as_str()) {
                return Err(ProviderImportError::DuplicateId(provider.id.clone()));
            }
        }

        Ok(Self { providers })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProviderImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let directory = Self::from_csv_reader(file)?;
        info!(path = %path.display(), providers = directory.len(), "loaded provider directory");
        Ok(directory)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ProviderImportError> {
        Self::from_providers(parse_providers(reader)?)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|provider| provider.id == id)
    }

    pub fn specialties(&self) -> Vec<&str> {
        unique_sorted(self.providers.iter().map(|p| p.specialty.as_str()))
    }

    pub fn languages(&self) -> Vec<&str> {
        unique_sorted(
            self.providers
                .iter()
                .flat_map(|p| p.languages.iter().map(String::as_str)),
        )
    }

    pub fn states(&self) -> Vec<&str> {
        unique_sorted(self.providers.iter().map(|p| p.state.as_str()))
    }
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}
