use chrono::{DateTime, TimeZone, Utc};

use crate::clock::FixedClock;
use crate::workflows::eligibility::{
    Circumstances, EligibilityEngine, EligibilityInput, EligibilityQuestionnaire, PovertyGuideline,
};

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::standard(PovertyGuideline::default())
}

pub(super) fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 3, 15, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn household(size: u32, income: f64, ages: &[u32]) -> EligibilityInput {
    EligibilityInput {
        household_size: size,
        annual_income: income,
        member_ages: ages.to_vec(),
        circumstances: Circumstances::default(),
    }
}

pub(super) fn questionnaire() -> EligibilityQuestionnaire<FixedClock> {
    EligibilityQuestionnaire::new(engine(), FixedClock(submitted_at()))
}
