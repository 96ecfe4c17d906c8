use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_AMOUNT: u32 = 14_580;
pub const DEFAULT_PER_ADDITIONAL_MEMBER: u32 = 5_140;

/// Federal Poverty Level guideline: a base amount for a single-person household
/// plus a fixed increment for each additional member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PovertyGuideline {
    pub base_amount: u32,
    pub per_additional_member: u32,
}

impl Default for PovertyGuideline {
    fn default() -> Self {
        Self {
            base_amount: DEFAULT_BASE_AMOUNT,
            per_additional_member: DEFAULT_PER_ADDITIONAL_MEMBER,
        }
    }
}

impl PovertyGuideline {
    pub fn threshold(&self, household_size: u32) -> u64 {
        let additional = u64::from(household_size.max(1) - 1);
        u64::from(self.base_amount) + u64::from(self.per_additional_member) * additional
    }

    /// Unrounded income as a percentage of the household's threshold.
    pub fn percent_of_threshold(&self, annual_income: f64, household_size: u32) -> f64 {
        let threshold = self.threshold(household_size);
        if threshold == 0 {
            return 0.0;
        }
        annual_income / threshold as f64 * 100.0
    }
}
