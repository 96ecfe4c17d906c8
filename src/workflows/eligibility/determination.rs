use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::poverty::PovertyGuideline;
use super::programs::{ProgramCatalog, ProgramEntry, ProgramId};
use super::rules::RuleSet;

/// Special circumstances captured by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Circumstances {
    pub pregnant: bool,
    pub disability: bool,
    pub foster_care: bool,
    pub student: bool,
}

/// Validated household facts the determination runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityInput {
    pub household_size: u32,
    pub annual_income: f64,
    pub member_ages: Vec<u32>,
    pub circumstances: Circumstances,
}

/// Outcome of the rules pass, before it is stamped into a result record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Determination {
    pub federal_poverty_level_threshold: u64,
    pub income_percent_of_fpl: u64,
    pub qualifying_programs: Vec<ProgramEntry>,
}

/// Immutable record of one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub income: f64,
    pub household_size: u32,
    pub federal_poverty_level_threshold: u64,
    pub income_percent_of_fpl: u64,
    pub qualifying_programs: Vec<ProgramEntry>,
    pub input: EligibilityInput,
    pub timestamp: DateTime<Utc>,
}

impl EligibilityResult {
    pub fn new(input: EligibilityInput, determination: Determination, timestamp: DateTime<Utc>) -> Self {
        Self {
            income: input.annual_income,
            household_size: input.household_size,
            federal_poverty_level_threshold: determination.federal_poverty_level_threshold,
            income_percent_of_fpl: determination.income_percent_of_fpl,
            qualifying_programs: determination.qualifying_programs,
            input,
            timestamp,
        }
    }

    pub fn qualifies_for(&self, program: ProgramId) -> bool {
        self.qualifying_programs.iter().any(|entry| entry.id == program)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("qualification rule references program {0:?} missing from the catalog")]
pub struct UnknownProgram(pub ProgramId);

/// Stateless evaluator applying the poverty guideline and rule set to a household.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    guideline: PovertyGuideline,
    rules: RuleSet,
    catalog: ProgramCatalog,
}

impl EligibilityEngine {
    pub fn new(
        guideline: PovertyGuideline,
        rules: RuleSet,
        catalog: ProgramCatalog,
    ) -> Result<Self, UnknownProgram> {
        if let Some(missing) = rules.programs().find(|id| catalog.get(*id).is_none()) {
            return Err(UnknownProgram(missing));
        }

        Ok(Self {
            guideline,
            rules,
            catalog,
        })
    }

    /// Reference rules and programs under the given guideline.
    pub fn standard(guideline: PovertyGuideline) -> Self {
        Self {
            guideline,
            rules: RuleSet::standard(),
            catalog: ProgramCatalog::standard(),
        }
    }

    pub fn guideline(&self) -> PovertyGuideline {
        self.guideline
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    /// Deterministic: identical input always yields an identical, identically ordered list.
    pub fn evaluate(&self, input: &EligibilityInput) -> Determination {
        let threshold = self.guideline.threshold(input.household_size);
        let percent = self
            .guideline
            .percent_of_threshold(input.annual_income, input.household_size);

        let qualifying_programs = self
            .rules
            .select(percent, input)
            .into_iter()
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect();

        Determination {
            federal_poverty_level_threshold: threshold,
            income_percent_of_fpl: percent.max(0.0).round() as u64,
            qualifying_programs,
        }
    }
}
