use serde::{Deserialize, Serialize};

/// Catalog key for a program a household can qualify for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramId {
    HealthFirstBasic,
    CareShieldPlus,
    WellCareEnhanced,
    ChildrensHealthInsurance,
    MaternalCare,
    MarketplacePlans,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramCategory {
    Medicaid,
    SubsidizedMarketplace,
    Chip,
    PregnancyMedicaid,
    Marketplace,
}

impl ProgramCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Medicaid => "Medicaid",
            Self::SubsidizedMarketplace => "Subsidized Marketplace",
            Self::Chip => "CHIP",
            Self::PregnancyMedicaid => "Pregnancy Medicaid",
            Self::Marketplace => "Marketplace",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub id: ProgramId,
    pub name: String,
    pub category: ProgramCategory,
    pub monthly_premium: u32,
    pub short_description: String,
    pub coverage_summary: String,
}

impl ProgramEntry {
    fn new(
        id: ProgramId,
        name: &str,
        category: ProgramCategory,
        monthly_premium: u32,
        short_description: &str,
        coverage_summary: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            category,
            monthly_premium,
            short_description: short_description.to_string(),
            coverage_summary: coverage_summary.to_string(),
        }
    }

    pub fn premium_label(&self) -> String {
        match self.monthly_premium {
            0 => "FREE".to_string(),
            premium => format!("${premium}/month"),
        }
    }
}

/// Fixed list of programs that qualification rules resolve against.
#[derive(Debug, Clone)]
pub struct ProgramCatalog {
    entries: Vec<ProgramEntry>,
}

impl ProgramCatalog {
    pub fn new(entries: Vec<ProgramEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(standard_programs())
    }

    pub fn get(&self, id: ProgramId) -> Option<&ProgramEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[ProgramEntry] {
        &self.entries
    }
}

fn standard_programs() -> Vec<ProgramEntry> {
    vec![
        ProgramEntry::new(
            ProgramId::HealthFirstBasic,
            "HealthFirst Basic",
            ProgramCategory::Medicaid,
            0,
            "Comprehensive coverage with no monthly premium",
            "Full coverage including preventive care, doctor visits, hospital stays, prescriptions, mental health services, and more",
        ),
        ProgramEntry::new(
            ProgramId::CareShieldPlus,
            "CareShield Plus",
            ProgramCategory::SubsidizedMarketplace,
            50,
            "Affordable coverage with low monthly premium",
            "Comprehensive coverage with subsidized premiums and cost-sharing reductions",
        ),
        ProgramEntry::new(
            ProgramId::WellCareEnhanced,
            "WellCare Enhanced",
            ProgramCategory::SubsidizedMarketplace,
            150,
            "Quality coverage with moderate subsidies",
            "Comprehensive coverage with partial premium subsidies",
        ),
        ProgramEntry::new(
            ProgramId::ChildrensHealthInsurance,
            "Children's Health Insurance Program (CHIP)",
            ProgramCategory::Chip,
            0,
            "Free or low-cost coverage for children",
            "Comprehensive coverage for children up to age 19 including dental and vision",
        ),
        ProgramEntry::new(
            ProgramId::MaternalCare,
            "Maternal Care Program",
            ProgramCategory::PregnancyMedicaid,
            0,
            "Comprehensive prenatal and maternity coverage",
            "Full prenatal care, delivery, postpartum care, and newborn coverage",
        ),
        ProgramEntry::new(
            ProgramId::MarketplacePlans,
            "Marketplace Plans",
            ProgramCategory::Marketplace,
            250,
            "Standard marketplace health insurance plans",
            "Choose from various plan tiers with different coverage levels",
        ),
    ]
}
