//! Eligibility screening: poverty-level bucketing of a household into qualifying programs.

mod determination;
pub mod poverty;
pub mod programs;
pub mod questionnaire;
pub mod rules;

#[cfg(test)]
mod tests;

pub use determination::{
    Circumstances, Determination, EligibilityEngine, EligibilityInput, EligibilityResult,
    UnknownProgram,
};
pub use poverty::PovertyGuideline;
pub use programs::{ProgramCatalog, ProgramCategory, ProgramEntry, ProgramId};
pub use questionnaire::{questionnaire_schema, EligibilityQuestionnaire};
pub use rules::{FallbackRule, HouseholdCondition, IncomeBand, QualificationRule, RuleSet};
