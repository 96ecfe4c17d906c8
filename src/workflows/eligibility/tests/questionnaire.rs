use super::common::*;
use crate::workflows::eligibility::questionnaire::{fields, input_from_values, MAX_ANNUAL_INCOME};
use crate::workflows::eligibility::ProgramId;
use crate::workflows::intake::{AdvanceOutcome, CompletionError, FieldValues, SubmitError};

#[test]
fn household_step_reports_reference_messages() {
    let mut flow = questionnaire();
    let sequencer = flow.sequencer_mut();
    sequencer.set_field(fields::HOUSEHOLD_SIZE, "0");
    sequencer.set_field(fields::ZIP_CODE, "5030");

    assert!(matches!(sequencer.advance(), AdvanceOutcome::Blocked { error_count: 2 }));
    assert_eq!(
        sequencer.errors().get(fields::HOUSEHOLD_SIZE),
        Some("Please enter a valid household size")
    );
    assert_eq!(
        sequencer.errors().get(fields::ZIP_CODE),
        Some("Please enter a valid 5-digit ZIP code")
    );
}

#[test]
fn member_ages_are_required_for_the_declared_size() {
    let mut flow = questionnaire();
    let sequencer = flow.sequencer_mut();
    sequencer.set_field(fields::HOUSEHOLD_SIZE, "2");
    sequencer.set_field(fields::ZIP_CODE, "50309");
    assert_eq!(sequencer.advance(), AdvanceOutcome::Advanced { step: 2 });
    assert_eq!(sequencer.values().ages(fields::HOUSEHOLD_MEMBERS), &[0, 0]);

    sequencer.set_field(fields::HOUSEHOLD_MEMBERS, vec![34u32]);
    assert!(matches!(sequencer.advance(), AdvanceOutcome::Blocked { .. }));
    assert_eq!(
        sequencer.errors().get(fields::HOUSEHOLD_MEMBERS),
        Some("Please enter ages for all household members")
    );

    sequencer.set_field(fields::HOUSEHOLD_MEMBERS, vec![34u32, 140]);
    assert!(matches!(sequencer.advance(), AdvanceOutcome::Blocked { .. }));

    sequencer.set_field(fields::HOUSEHOLD_MEMBERS, vec![34u32, 6]);
    assert_eq!(sequencer.advance(), AdvanceOutcome::Advanced { step: 3 });
}

#[test]
fn negative_income_is_rejected() {
    let mut flow = questionnaire();
    let sequencer = flow.sequencer_mut();
    sequencer.set_field(fields::HOUSEHOLD_SIZE, "1");
    sequencer.set_field(fields::ZIP_CODE, "50309");
    sequencer.advance();
    sequencer.advance();

    sequencer.set_field(fields::ANNUAL_INCOME, "-100");
    assert!(matches!(sequencer.advance(), AdvanceOutcome::Blocked { .. }));
    assert_eq!(
        sequencer.errors().get(fields::ANNUAL_INCOME),
        Some("Income cannot be negative")
    );
}

#[test]
fn income_is_capped_at_one_billion() {
    let mut flow = questionnaire();
    {
        let sequencer = flow.sequencer_mut();
        sequencer.set_field(fields::HOUSEHOLD_SIZE, "1");
        sequencer.set_field(fields::ZIP_CODE, "50309");
        sequencer.advance();
        sequencer.set_field(fields::HOUSEHOLD_MEMBERS, vec![45u32]);
        sequencer.advance();

        sequencer.set_field(fields::ANNUAL_INCOME, "1000000000.01");
        assert!(matches!(sequencer.advance(), AdvanceOutcome::Blocked { .. }));
        assert_eq!(
            sequencer.errors().get(fields::ANNUAL_INCOME),
            Some("Please enter an annual income of $1,000,000,000 or less")
        );

        sequencer.set_field(fields::ANNUAL_INCOME, MAX_ANNUAL_INCOME);
        assert_eq!(sequencer.advance(), AdvanceOutcome::Advanced { step: 4 });
        sequencer.set_field(fields::EMPLOYMENT_STATUS, "self-employed");
        sequencer.advance();
    }

    let result = flow.submit().expect("income at the cap submits");
    assert_eq!(result.income_percent_of_fpl, 6_858_711);
}

#[test]
fn input_above_income_cap_is_refused() {
    let mut values = FieldValues::new();
    values.set(fields::HOUSEHOLD_SIZE, 1u32);
    values.set(fields::HOUSEHOLD_MEMBERS, vec![45u32]);
    values.set(fields::ANNUAL_INCOME, 1.0e20);

    match input_from_values(&values) {
        Err(CompletionError::InvalidField { field, .. }) => {
            assert_eq!(field, fields::ANNUAL_INCOME)
        }
        other => panic!("expected invalid income, got {other:?}"),
    }
}

#[test]
fn completed_questionnaire_yields_stamped_result() {
    let mut flow = questionnaire();
    {
        let sequencer = flow.sequencer_mut();
        sequencer.set_field(fields::HOUSEHOLD_SIZE, "3");
        sequencer.set_field(fields::ZIP_CODE, "50309");
        sequencer.set_field(fields::NEEDS_COVERAGE, "family");
        sequencer.advance();
        sequencer.set_field(fields::HOUSEHOLD_MEMBERS, vec![31u32, 33, 4]);
        sequencer.advance();
        sequencer.set_field(fields::ANNUAL_INCOME, "36000");
        sequencer.advance();
        sequencer.set_field(fields::EMPLOYMENT_STATUS, "employed-part-time");
        sequencer.advance();
        sequencer.set_field(fields::IS_PREGNANT, true);
        assert_eq!(sequencer.current_step(), 5);
    }

    let result = flow.submit().expect("questionnaire submits");
    assert_eq!(result.household_size, 3);
    assert_eq!(result.income, 36_000.0);
    assert_eq!(result.federal_poverty_level_threshold, 24_860);
    assert_eq!(result.income_percent_of_fpl, 145);
    assert_eq!(result.timestamp, submitted_at());
    assert!(result.input.circumstances.pregnant);
    assert!(result.qualifies_for(ProgramId::ChildrensHealthInsurance));
    assert!(result.qualifies_for(ProgramId::MaternalCare));
    assert!(!result.qualifies_for(ProgramId::HealthFirstBasic));
}

#[test]
fn submit_before_last_step_is_refused() {
    let mut flow = questionnaire();
    let err = flow.submit().expect_err("still on step one");
    assert!(matches!(err, SubmitError::NotFinalStep { current: 1, total: 5 }));
}

#[test]
fn resubmission_supersedes_with_identical_programs() {
    let mut flow = questionnaire();
    {
        let sequencer = flow.sequencer_mut();
        sequencer.set_field(fields::HOUSEHOLD_SIZE, "1");
        sequencer.set_field(fields::ZIP_CODE, "10001");
        sequencer.advance();
        sequencer.set_field(fields::HOUSEHOLD_MEMBERS, vec![58u32]);
        sequencer.advance();
        sequencer.set_field(fields::ANNUAL_INCOME, "0");
        sequencer.advance();
        sequencer.set_field(fields::EMPLOYMENT_STATUS, "unemployed");
        sequencer.advance();
    }

    let first = flow.submit().expect("first submission");
    let second = flow.submit().expect("second submission");
    assert_eq!(first, second);
    assert_eq!(first.income_percent_of_fpl, 0);
}
