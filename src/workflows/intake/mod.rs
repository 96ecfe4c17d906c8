//! Guided multi-step intake: field records, declarative validation rules, and the
//! step sequencer shared by the eligibility questionnaire and enrollment application.

pub mod fields;
pub mod rules;
pub mod schema;
pub mod sequencer;


pub use fields::{FieldValue, FieldValues};
pub use rules::{FieldRule, FieldSpec, PatternKind, RuleCheck, ValidationErrors};
pub use schema::{LeaveEffect, SchemaError, StepDefinition, StepSchema};
pub use sequencer::{
    AdvanceOutcome, CompletionError, CompletionHandler, StepSequencer, SubmitError,
};
