use crate::workflows::enrollment::{fields, EnrollmentStatus, Gender};
use crate::workflows::intake::{AdvanceOutcome, SubmitError};

use super::common::{
    application, application_at_review, fill_contact, fill_documents, fill_personal,
    submitted_at,
};

#[test]
fn empty_personal_step_reports_each_required_field() {
    let mut app = application();

    assert_eq!(
        app.sequencer_mut().advance(),
        AdvanceOutcome::Blocked { error_count: 5 }
    );

    let errors = app.sequencer().errors();
    assert_eq!(errors.get(fields::FIRST_NAME), Some("First name is required"));
    assert_eq!(errors.get(fields::LAST_NAME), Some("Last name is required"));
    assert_eq!(errors.get(fields::DATE_OF_BIRTH), Some("Date of birth is required"));
    assert_eq!(errors.get(fields::SSN), Some("Valid SSN required (XXX-XX-XXXX)"));
    assert_eq!(errors.get(fields::GENDER), Some("Gender is required"));
    assert!(errors.get(fields::MIDDLE_NAME).is_none());
}

#[test]
fn malformed_contact_details_block_the_second_step() {
    let mut app = application();
    fill_personal(&mut app);
    app.sequencer_mut().advance();

    let form = app.sequencer_mut();
    form.set_field(fields::EMAIL, "rosa-at-example");
    form.set_field(fields::PHONE, "512-555-0134");
    form.set_field(fields::ADDRESS, "418 Cedar Ln");
    form.set_field(fields::CITY, "Austin");
    form.set_field(fields::STATE, "WA");
    form.set_field(fields::ZIP_CODE, "7870");

    assert_eq!(form.advance(), AdvanceOutcome::Blocked { error_count: 4 });
    let errors = form.errors();
    assert_eq!(errors.get(fields::EMAIL), Some("Valid email is required"));
    assert_eq!(errors.get(fields::PHONE), Some("Valid phone number required"));
    assert_eq!(errors.get(fields::STATE), Some("State is required"));
    assert_eq!(errors.get(fields::ZIP_CODE), Some("Valid 5-digit ZIP code required"));
}

#[test]
fn unsigned_review_step_rejects_submission() {
    let mut app = application_at_review();

    match app.submit() {
        Err(SubmitError::Invalid(errors)) => {
            assert_eq!(errors.get(fields::SIGNATURE), Some("Signature is required"));
        }
        other => panic!("expected missing signature, got {other:?}"),
    }
}

#[test]
fn submission_before_review_step_is_refused() {
    let mut app = application();
    fill_personal(&mut app);

    match app.submit() {
        Err(SubmitError::NotFinalStep { current, total }) => {
            assert_eq!((current, total), (1, 4));
        }
        other => panic!("expected not-final-step error, got {other:?}"),
    }
}

#[test]
fn signed_application_produces_submitted_record() {
    let mut app = application_at_review();
    app.sequencer_mut().set_field(fields::SIGNATURE, "Rosa Delgado");

    let record = app.submit().expect("record is produced");

    assert_eq!(record.application_number.0, "APP-000000001");
    assert_eq!(record.status, EnrollmentStatus::Submitted);
    assert_eq!(record.submitted_at, submitted_at());
    assert_eq!(record.applicant.full_name(), "Rosa Delgado");
    assert_eq!(record.applicant.gender, Gender::Female);
    assert_eq!(record.applicant.ssn, "123-45-6789");
    assert_eq!(record.applicant.masked_ssn(), "***-**-6789");
    assert_eq!(record.contact.phone, "(512) 555-0134");
    assert_eq!(record.documents.proof_of_residence, "utility-bill.pdf");
    assert_eq!(
        record.selected_plan.as_ref().map(|plan| plan.id.as_str()),
        Some("careshield-plus")
    );
}

#[test]
fn numeric_answers_in_text_fields_reach_the_record() {
    let mut app = application();
    fill_personal(&mut app);
    assert_eq!(app.sequencer_mut().advance(), AdvanceOutcome::Advanced { step: 2 });
    fill_contact(&mut app);
    app.sequencer_mut().set_field(fields::ADDRESS, 418.0);
    assert_eq!(app.sequencer_mut().advance(), AdvanceOutcome::Advanced { step: 3 });
    fill_documents(&mut app);
    app.sequencer_mut().set_field(fields::PROOF_OF_INCOME, 2024u32);
    assert_eq!(app.sequencer_mut().advance(), AdvanceOutcome::Advanced { step: 4 });
    app.sequencer_mut().set_field(fields::SIGNATURE, "Rosa Delgado");

    let record = app.submit().expect("numeric answers still produce a record");
    assert_eq!(record.contact.address, "418");
    assert_eq!(record.documents.proof_of_income, "2024");
}

#[test]
fn failed_submission_does_not_consume_an_application_number() {
    let mut app = application_at_review();
    assert!(app.submit().is_err());

    app.sequencer_mut().set_field(fields::SIGNATURE, "Rosa Delgado");
    let record = app.submit().expect("record is produced");
    assert_eq!(record.application_number.0, "APP-000000001");
}

#[test]
fn record_serializes_status_in_lowercase() {
    let mut app = application_at_review();
    app.sequencer_mut().set_field(fields::SIGNATURE, "Rosa Delgado");
    let record = app.submit().expect("record is produced");

    let json = serde_json::to_value(&record).expect("record serializes");
    assert_eq!(json["status"], "submitted");
    assert_eq!(json["application_number"], "APP-000000001");
}
