use tracing::info;

use crate::clock::Clock;
use crate::workflows::intake::{
    CompletionError, CompletionHandler, FieldRule, FieldSpec, FieldValues, LeaveEffect,
    PatternKind, StepDefinition, StepSchema, StepSequencer, SubmitError,
};

use super::determination::{Circumstances, EligibilityEngine, EligibilityInput, EligibilityResult};

pub mod fields {
    pub const HOUSEHOLD_SIZE: &str = "householdSize";
    pub const ZIP_CODE: &str = "zipCode";
    pub const NEEDS_COVERAGE: &str = "needsCoverage";
    pub const HOUSEHOLD_MEMBERS: &str = "householdMembers";
    pub const ANNUAL_INCOME: &str = "annualIncome";
    pub const EMPLOYMENT_STATUS: &str = "employmentStatus";
    pub const IS_PREGNANT: &str = "isPregnant";
    pub const HAS_DISABILITY: &str = "hasDisability";
    pub const IS_FOSTER_CARE: &str = "isFosterCare";
    pub const IS_STUDENT: &str = "isStudent";
}

pub const COVERAGE_CHOICES: &[&str] = &["self", "family", "family-only"];

/// Largest annual income the screening accepts.
pub const MAX_ANNUAL_INCOME: f64 = 1_000_000_000.0;

pub const EMPLOYMENT_CHOICES: &[&str] = &[
    "employed-full-time",
    "employed-part-time",
    "self-employed",
    "unemployed",
    "retired",
    "student",
];

/// Five-step household screening form.
pub fn questionnaire_schema() -> StepSchema {
    use fields::*;

    let steps = vec![
        StepDefinition::new("household", "Household Information")
            .field(
                FieldSpec::new(HOUSEHOLD_SIZE)
                    .check(FieldRule::Required, "Please enter a valid household size")
                    .check(FieldRule::WholeNumber, "Please enter a valid household size")
                    .check(
                        FieldRule::Range {
                            min: 1.0,
                            max: 20.0,
                        },
                        "Please enter a valid household size",
                    ),
            )
            .field(FieldSpec::new(ZIP_CODE).check(
                FieldRule::Pattern(PatternKind::PostalCode),
                "Please enter a valid 5-digit ZIP code",
            ))
            .field(FieldSpec::new(NEEDS_COVERAGE).check(
                FieldRule::OneOf(COVERAGE_CHOICES),
                "Please choose who needs coverage",
            ))
            .on_leave(LeaveEffect::ResizeAges {
                size_field: HOUSEHOLD_SIZE,
                list_field: HOUSEHOLD_MEMBERS,
            }),
        StepDefinition::new("members", "Household Member Ages").field(
            FieldSpec::new(HOUSEHOLD_MEMBERS)
                .check(
                    FieldRule::AgesMatchHouseholdSize {
                        size_field: HOUSEHOLD_SIZE,
                    },
                    "Please enter ages for all household members",
                )
                .check(
                    FieldRule::AgesEach { min: 0, max: 120 },
                    "Ages must be between 0 and 120",
                ),
        ),
        StepDefinition::new("income", "Income Information").field(
            FieldSpec::new(ANNUAL_INCOME)
                .check(
                    FieldRule::Required,
                    "Please enter your annual household income",
                )
                .check(FieldRule::NonNegative, "Income cannot be negative")
                .check(
                    FieldRule::Range {
                        min: 0.0,
                        max: MAX_ANNUAL_INCOME,
                    },
                    "Please enter an annual income of $1,000,000,000 or less",
                ),
        ),
        StepDefinition::new("employment", "Employment Status").field(
            FieldSpec::new(EMPLOYMENT_STATUS).check(
                FieldRule::OneOf(EMPLOYMENT_CHOICES),
                "Please select your employment status",
            ),
        ),
        StepDefinition::new("circumstances", "Special Circumstances")
            .field(FieldSpec::new(IS_PREGNANT))
            .field(FieldSpec::new(HAS_DISABILITY))
            .field(FieldSpec::new(IS_FOSTER_CARE))
            .field(FieldSpec::new(IS_STUDENT)),
    ];

    StepSchema::new(steps).expect("questionnaire schema declares each field once")
}

fn initial_values() -> FieldValues {
    let mut values = FieldValues::new();
    values.set(fields::NEEDS_COVERAGE, "self");
    for flag in [
        fields::IS_PREGNANT,
        fields::HAS_DISABILITY,
        fields::IS_FOSTER_CARE,
        fields::IS_STUDENT,
    ] {
        values.set(flag, false);
    }
    values
}

/// Read validated answers into the determination input.
pub fn input_from_values(values: &FieldValues) -> Result<EligibilityInput, CompletionError> {
    let size = values
        .number(fields::HOUSEHOLD_SIZE)
        .ok_or(CompletionError::MissingField(fields::HOUSEHOLD_SIZE))?;
    if size < 1.0 || size.fract() != 0.0 || size > f64::from(u32::MAX) {
        return Err(CompletionError::InvalidField {
            field: fields::HOUSEHOLD_SIZE,
            reason: format!("{size} is not a household size"),
        });
    }

    let income = values
        .number(fields::ANNUAL_INCOME)
        .ok_or(CompletionError::MissingField(fields::ANNUAL_INCOME))?;
    if income < 0.0 {
        return Err(CompletionError::InvalidField {
            field: fields::ANNUAL_INCOME,
            reason: "income cannot be negative".to_string(),
        });
    }
    if income > MAX_ANNUAL_INCOME {
        return Err(CompletionError::InvalidField {
            field: fields::ANNUAL_INCOME,
            reason: format!("income above {MAX_ANNUAL_INCOME}"),
        });
    }

    Ok(EligibilityInput {
        household_size: size as u32,
        annual_income: income,
        member_ages: values.ages(fields::HOUSEHOLD_MEMBERS).to_vec(),
        circumstances: Circumstances {
            pregnant: values.flag(fields::IS_PREGNANT),
            disability: values.flag(fields::HAS_DISABILITY),
            foster_care: values.flag(fields::IS_FOSTER_CARE),
            student: values.flag(fields::IS_STUDENT),
        },
    })
}

struct DeterminationHandler<'a, C> {
    engine: &'a EligibilityEngine,
    clock: &'a C,
}

impl<C: Clock> CompletionHandler for DeterminationHandler<'_, C> {
    type Output = EligibilityResult;

    fn complete(&mut self, values: &FieldValues) -> Result<EligibilityResult, CompletionError> {
        let input = input_from_values(values)?;
        let determination = self.engine.evaluate(&input);
        Ok(EligibilityResult::new(input, determination, self.clock.now()))
    }
}

/// Eligibility screening flow: one sequencer over the questionnaire schema, finishing in a
/// determination.
pub struct EligibilityQuestionnaire<C> {
    sequencer: StepSequencer,
    engine: EligibilityEngine,
    clock: C,
}

impl<C: Clock> EligibilityQuestionnaire<C> {
    pub fn new(engine: EligibilityEngine, clock: C) -> Self {
        Self {
            sequencer: StepSequencer::with_values(questionnaire_schema(), initial_values()),
            engine,
            clock,
        }
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut StepSequencer {
        &mut self.sequencer
    }

    pub fn submit(&mut self) -> Result<EligibilityResult, SubmitError> {
        let mut handler = DeterminationHandler {
            engine: &self.engine,
            clock: &self.clock,
        };
        let result = self.sequencer.submit(&mut handler)?;

        info!(
            household_size = result.household_size,
            percent_of_fpl = result.income_percent_of_fpl,
            programs = result.qualifying_programs.len(),
            "eligibility determination complete"
        );

        Ok(result)
    }
}
