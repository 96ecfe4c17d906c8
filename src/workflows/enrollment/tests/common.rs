use chrono::{DateTime, TimeZone, Utc};

use crate::clock::FixedClock;
use crate::workflows::enrollment::{
    fields, EnrollmentApplication, SequentialApplicationNumbers,
};
use crate::workflows::intake::AdvanceOutcome;
use crate::workflows::plans::PlanCatalog;

pub(super) fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 4, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn application() -> EnrollmentApplication<SequentialApplicationNumbers, FixedClock> {
    let plan = PlanCatalog::standard()
        .find("careshield-plus")
        .cloned()
        .expect("catalog plan");
    EnrollmentApplication::new(
        Some(plan),
        SequentialApplicationNumbers::default(),
        FixedClock(submitted_at()),
    )
}

pub(super) fn fill_personal(app: &mut EnrollmentApplication<SequentialApplicationNumbers, FixedClock>) {
    let form = app.sequencer_mut();
    form.set_field(fields::FIRST_NAME, "Rosa");
    form.set_field(fields::LAST_NAME, "Delgado");
    form.set_field(fields::DATE_OF_BIRTH, "1988-04-12");
    form.set_field(fields::GENDER, "Female");
    app.set_national_id("123456789");
}

pub(super) fn fill_contact(app: &mut EnrollmentApplication<SequentialApplicationNumbers, FixedClock>) {
    app.set_phone("5125550134");
    let form = app.sequencer_mut();
    form.set_field(fields::EMAIL, "rosa.delgado@example.com");
    form.set_field(fields::ADDRESS, "418 Cedar Ln");
    form.set_field(fields::CITY, "Austin");
    form.set_field(fields::STATE, "TX");
    form.set_field(fields::ZIP_CODE, "78701");
}

pub(super) fn fill_documents(app: &mut EnrollmentApplication<SequentialApplicationNumbers, FixedClock>) {
    let form = app.sequencer_mut();
    form.set_field(fields::PROOF_OF_INCOME, "w2-2024.pdf");
    form.set_field(fields::PROOF_OF_IDENTITY, "drivers-license.jpg");
    form.set_field(fields::PROOF_OF_RESIDENCE, "utility-bill.pdf");
}

/// Fill and advance through the first three steps, leaving the review step open.
pub(super) fn application_at_review() -> EnrollmentApplication<SequentialApplicationNumbers, FixedClock> {
    let mut app = application();

    fill_personal(&mut app);
    assert_eq!(app.sequencer_mut().advance(), AdvanceOutcome::Advanced { step: 2 });
    fill_contact(&mut app);
    assert_eq!(app.sequencer_mut().advance(), AdvanceOutcome::Advanced { step: 3 });
    fill_documents(&mut app);
    assert_eq!(app.sequencer_mut().advance(), AdvanceOutcome::Advanced { step: 4 });

    app
}
