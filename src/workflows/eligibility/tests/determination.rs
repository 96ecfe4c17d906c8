use super::common::*;
use crate::workflows::eligibility::{
    Circumstances, EligibilityEngine, EligibilityResult, HouseholdCondition, IncomeBand,
    PovertyGuideline, ProgramCatalog, ProgramId, QualificationRule, RuleSet, UnknownProgram,
};

fn program_ids(input: &crate::workflows::eligibility::EligibilityInput) -> Vec<ProgramId> {
    engine()
        .evaluate(input)
        .qualifying_programs
        .iter()
        .map(|entry| entry.id)
        .collect()
}

#[test]
fn family_of_four_near_poverty_line_gets_lowest_tier_only() {
    let input = household(4, 30_000.0, &[38, 36, 40, 41]);
    let determination = engine().evaluate(&input);

    assert_eq!(determination.federal_poverty_level_threshold, 29_994);
    assert_eq!(determination.income_percent_of_fpl, 100);
    assert_eq!(program_ids(&input), vec![ProgramId::HealthFirstBasic]);
}

#[test]
fn zero_income_single_adult_needs_no_fallback() {
    let input = household(1, 0.0, &[29]);
    let determination = engine().evaluate(&input);

    assert_eq!(determination.income_percent_of_fpl, 0);
    assert_eq!(program_ids(&input), vec![ProgramId::HealthFirstBasic]);
}

#[test]
fn middle_band_adds_marketplace_fallback() {
    // 25,000 / 19,720 = 126.8% for two people; 35,000 / 19,720 = 177.5%
    assert_eq!(
        program_ids(&household(2, 35_000.0, &[45, 47])),
        vec![ProgramId::CareShieldPlus, ProgramId::MarketplacePlans]
    );
    assert_eq!(
        program_ids(&household(2, 25_000.0, &[45, 47])),
        vec![ProgramId::HealthFirstBasic]
    );
}

#[test]
fn children_and_pregnancy_follow_tier_programs_in_rule_order() {
    let mut input = household(3, 36_000.0, &[31, 33, 4]);
    input.circumstances = Circumstances {
        pregnant: true,
        ..Circumstances::default()
    };

    // 36,000 / 24,860 = 144.8%
    assert_eq!(
        program_ids(&input),
        vec![
            ProgramId::CareShieldPlus,
            ProgramId::ChildrensHealthInsurance,
            ProgramId::MaternalCare,
            ProgramId::MarketplacePlans,
        ]
    );
}

#[test]
fn high_income_households_only_see_marketplace() {
    let input = household(1, 90_000.0, &[52]);
    assert_eq!(program_ids(&input), vec![ProgramId::MarketplacePlans]);
}

#[test]
fn chip_stops_at_two_hundred_fifty_percent() {
    let guideline = PovertyGuideline::default();
    let threshold = guideline.threshold(2) as f64;

    let at_limit = household(2, threshold * 2.5, &[30, 18]);
    assert!(program_ids(&at_limit).contains(&ProgramId::ChildrensHealthInsurance));

    let above = household(2, threshold * 2.51, &[30, 18]);
    assert!(!program_ids(&above).contains(&ProgramId::ChildrensHealthInsurance));

    let adult_only = household(2, threshold * 1.5, &[30, 19]);
    assert!(!program_ids(&adult_only).contains(&ProgramId::ChildrensHealthInsurance));
}

#[test]
fn band_edges_use_unrounded_percentage() {
    let threshold = PovertyGuideline::default().threshold(1) as f64;
    let just_over = household(1, threshold * 1.3804, &[40]);
    let determination = engine().evaluate(&just_over);

    assert_eq!(determination.income_percent_of_fpl, 138);
    assert_eq!(
        program_ids(&just_over),
        vec![ProgramId::CareShieldPlus, ProgramId::MarketplacePlans]
    );
}

#[test]
fn reported_percentage_is_plain_rounding() {
    let engine = engine();
    for (size, income) in [(1, 1_000.0), (3, 52_345.67), (7, 81_000.0), (12, 0.5)] {
        let input = household(size, income, &[]);
        let expected = (income / engine.guideline().threshold(size) as f64 * 100.0).round() as u64;
        assert_eq!(engine.evaluate(&input).income_percent_of_fpl, expected);
    }
}

#[test]
fn large_incomes_report_the_full_percentage() {
    let determination = engine().evaluate(&household(1, 1.0e12, &[40]));
    assert_eq!(determination.income_percent_of_fpl, 6_858_710_562);
    assert!(determination.income_percent_of_fpl > u64::from(u32::MAX));
}

#[test]
fn program_list_is_never_empty() {
    let engine = engine();
    for size in 1..=8 {
        for income in [0.0, 10_000.0, 27_500.0, 41_000.0, 63_000.0, 150_000.0, 1_000_000.0] {
            let determination = engine.evaluate(&household(size, income, &[]));
            assert!(
                !determination.qualifying_programs.is_empty(),
                "size {size} income {income}"
            );
        }
    }
}

#[test]
fn evaluation_is_deterministic() {
    let mut input = household(5, 48_250.0, &[44, 42, 17, 12, 3]);
    input.circumstances.pregnant = true;

    let first = engine().evaluate(&input);
    let second = engine().evaluate(&input);
    assert_eq!(first, second);

    let stamped_a = EligibilityResult::new(input.clone(), first, submitted_at());
    let stamped_b = EligibilityResult::new(input, second, submitted_at());
    assert_eq!(stamped_a, stamped_b);
}

#[test]
fn custom_guideline_changes_threshold_not_rules() {
    let engine = EligibilityEngine::standard(PovertyGuideline {
        base_amount: 15_650,
        per_additional_member: 5_500,
    });
    let determination = engine.evaluate(&household(2, 21_150.0, &[30, 29]));
    assert_eq!(determination.federal_poverty_level_threshold, 21_150);
    assert_eq!(determination.income_percent_of_fpl, 100);
}

#[test]
fn engine_rejects_rules_for_unknown_programs() {
    let mut rules = RuleSet::standard();
    rules.rules.push(QualificationRule {
        program: ProgramId::WellCareEnhanced,
        band: IncomeBand::up_to(400.0),
        condition: HouseholdCondition::None,
    });
    let catalog = ProgramCatalog::new(
        ProgramCatalog::standard()
            .entries()
            .iter()
            .filter(|entry| entry.id != ProgramId::WellCareEnhanced)
            .cloned()
            .collect(),
    );

    let err = EligibilityEngine::new(PovertyGuideline::default(), rules, catalog)
        .expect_err("catalog is missing a referenced program");
    assert_eq!(err, UnknownProgram(ProgramId::WellCareEnhanced));
}
