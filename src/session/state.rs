use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::workflows::eligibility::EligibilityResult;
use crate::workflows::enrollment::EnrollmentRecord;
use crate::workflows::plans::Plan;

use super::store::{KeyValueStore, StoreError};

pub mod keys {
    pub const ELIGIBILITY: &str = "eligibilityData";
    pub const SELECTED_PLAN: &str = "selectedPlan";
    pub const ENROLLMENT: &str = "enrollmentData";
    pub const LOGGED_IN: &str = "isLoggedIn";
}

/// Display language toggle. Lives only for the session and is never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::English,
        }
    }
}

/// Cross-flow state passed explicitly to whoever needs it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub eligibility: Option<EligibilityResult>,
    pub selected_plan: Option<Plan>,
    pub enrollment: Option<EnrollmentRecord>,
    pub logged_in: bool,
    pub language: Language,
}

impl SessionState {
    /// Read every persisted entry. Entries that no longer deserialize are dropped with a
    /// warning rather than failing the whole load.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        Ok(Self {
            eligibility: read_entry(store, keys::ELIGIBILITY)?,
            selected_plan: read_entry(store, keys::SELECTED_PLAN)?,
            enrollment: read_entry(store, keys::ENROLLMENT)?,
            logged_in: read_entry(store, keys::LOGGED_IN)?.unwrap_or(false),
            language: Language::default(),
        })
    }

    /// A new determination replaces whatever was stored before.
    pub fn record_eligibility(
        &mut self,
        store: &dyn KeyValueStore,
        result: EligibilityResult,
    ) -> Result<(), StoreError> {
        write_entry(store, keys::ELIGIBILITY, Some(&result))?;
        self.eligibility = Some(result);
        Ok(())
    }

    pub fn select_plan(
        &mut self,
        store: &dyn KeyValueStore,
        plan: Option<Plan>,
    ) -> Result<(), StoreError> {
        write_entry(store, keys::SELECTED_PLAN, plan.as_ref())?;
        self.selected_plan = plan;
        Ok(())
    }

    pub fn record_enrollment(
        &mut self,
        store: &dyn KeyValueStore,
        record: EnrollmentRecord,
    ) -> Result<(), StoreError> {
        write_entry(store, keys::ENROLLMENT, Some(&record))?;
        self.enrollment = Some(record);
        Ok(())
    }

    pub fn set_logged_in(
        &mut self,
        store: &dyn KeyValueStore,
        logged_in: bool,
    ) -> Result<(), StoreError> {
        write_entry(store, keys::LOGGED_IN, Some(&logged_in))?;
        self.logged_in = logged_in;
        Ok(())
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }
}

fn read_entry<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.load(key)? else {
        return Ok(None);
    };

    match serde_json::from_value(raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(key, error = %err, "discarding malformed session entry");
            Ok(None)
        }
    }
}

fn write_entry<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: Option<&T>,
) -> Result<(), StoreError> {
    match value {
        Some(value) => store.save(key, serde_json::to_value(value)?),
        None => store.remove(key),
    }
}
