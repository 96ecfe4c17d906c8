use serde::{Deserialize, Serialize};

use super::determination::EligibilityInput;
use super::programs::ProgramId;

/// Percent-of-FPL interval `(above, up_to]`. An open side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeBand {
    pub above: Option<f64>,
    pub up_to: Option<f64>,
}

impl IncomeBand {
    pub const fn up_to(limit: f64) -> Self {
        Self {
            above: None,
            up_to: Some(limit),
        }
    }

    pub const fn between(above: f64, up_to: f64) -> Self {
        Self {
            above: Some(above),
            up_to: Some(up_to),
        }
    }

    pub fn contains(&self, percent: f64) -> bool {
        self.above.map_or(true, |floor| percent > floor)
            && self.up_to.map_or(true, |ceiling| percent <= ceiling)
    }
}

/// Household facts a rule can require in addition to its income band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdCondition {
    None,
    MemberYoungerThan(u32),
    Pregnant,
}

impl HouseholdCondition {
    fn holds(&self, input: &EligibilityInput) -> bool {
        match self {
            HouseholdCondition::None => true,
            HouseholdCondition::MemberYoungerThan(age) => {
                input.member_ages.iter().any(|member| member < age)
            }
            HouseholdCondition::Pregnant => input.circumstances.pregnant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationRule {
    pub program: ProgramId,
    pub band: IncomeBand,
    pub condition: HouseholdCondition,
}

impl QualificationRule {
    pub fn matches(&self, percent: f64, input: &EligibilityInput) -> bool {
        self.band.contains(percent) && self.condition.holds(input)
    }
}

/// Program appended when no rule matched or income sits above the lowest tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackRule {
    pub program: ProgramId,
    pub above_percent: f64,
}

/// Ordered qualification rules. Evaluation order is the order of `rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<QualificationRule>,
    pub fallback: FallbackRule,
}

impl RuleSet {
    pub fn standard() -> Self {
        Self {
            rules: vec![
                QualificationRule {
                    program: ProgramId::HealthFirstBasic,
                    band: IncomeBand::up_to(138.0),
                    condition: HouseholdCondition::None,
                },
                QualificationRule {
                    program: ProgramId::CareShieldPlus,
                    band: IncomeBand::between(138.0, 200.0),
                    condition: HouseholdCondition::None,
                },
                QualificationRule {
                    program: ProgramId::WellCareEnhanced,
                    band: IncomeBand::between(200.0, 300.0),
                    condition: HouseholdCondition::None,
                },
                QualificationRule {
                    program: ProgramId::ChildrensHealthInsurance,
                    band: IncomeBand::up_to(250.0),
                    condition: HouseholdCondition::MemberYoungerThan(19),
                },
                QualificationRule {
                    program: ProgramId::MaternalCare,
                    band: IncomeBand::up_to(200.0),
                    condition: HouseholdCondition::Pregnant,
                },
            ],
            fallback: FallbackRule {
                program: ProgramId::MarketplacePlans,
                above_percent: 138.0,
            },
        }
    }

    /// Programs selected for `input`, in rule order, each at most once.
    pub(crate) fn select(&self, percent: f64, input: &EligibilityInput) -> Vec<ProgramId> {
        let mut selected: Vec<ProgramId> = Vec::new();

        for rule in &self.rules {
            if rule.matches(percent, input) && !selected.contains(&rule.program) {
                selected.push(rule.program);
            }
        }

        let needs_fallback = selected.is_empty() || percent > self.fallback.above_percent;
        if needs_fallback && !selected.contains(&self.fallback.program) {
            selected.push(self.fallback.program);
        }

        selected
    }

    pub fn programs(&self) -> impl Iterator<Item = ProgramId> + '_ {
        self.rules
            .iter()
            .map(|rule| rule.program)
            .chain(std::iter::once(self.fallback.program))
    }
}
