use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderType {
    PrimaryCare,
    Specialist,
    Hospital,
    UrgentCare,
    Pharmacy,
    Dentist,
    EyeCare,
    PhysicalTherapy,
    MentalHealth,
    Chiropractor,
    AlternativeMedicine,
    Nutrition,
}

impl ProviderType {
    pub const ALL: [ProviderType; 12] = [
        ProviderType::PrimaryCare,
        ProviderType::Specialist,
        ProviderType::Hospital,
        ProviderType::UrgentCare,
        ProviderType::Pharmacy,
        ProviderType::Dentist,
        ProviderType::EyeCare,
        ProviderType::PhysicalTherapy,
        ProviderType::MentalHealth,
        ProviderType::Chiropractor,
        ProviderType::AlternativeMedicine,
        ProviderType::Nutrition,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ProviderType::PrimaryCare => "Primary Care Physician",
            ProviderType::Specialist => "Specialist",
            ProviderType::Hospital => "Hospital",
            ProviderType::UrgentCare => "Urgent Care",
            ProviderType::Pharmacy => "Pharmacy",
            ProviderType::Dentist => "Dentist",
            ProviderType::EyeCare => "Eye Care",
            ProviderType::PhysicalTherapy => "Physical Therapy",
            ProviderType::MentalHealth => "Mental Health",
            ProviderType::Chiropractor => "Chiropractor",
            ProviderType::AlternativeMedicine => "Alternative Medicine",
            ProviderType::Nutrition => "Nutrition",
        }
    }

    /// Accepts the display label (`Urgent Care`) or the slug (`urgent-care`).
    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = raw.trim();
        Self::ALL.into_iter().find(|kind| {
            kind.label().eq_ignore_ascii_case(wanted)
                || kind.label().replace(' ', "-").eq_ignore_ascii_case(wanted)
                || (wanted.eq_ignore_ascii_case("primary-care")
                    && *kind == ProviderType::PrimaryCare)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderGender {
    Female,
    Male,
    /// Facilities such as hospitals and pharmacies.
    NotApplicable,
}

impl ProviderGender {
    pub const fn label(self) -> &'static str {
        match self {
            ProviderGender::Female => "Female",
            ProviderGender::Male => "Male",
            ProviderGender::NotApplicable => "N/A",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "female" => Some(ProviderGender::Female),
            "male" => Some(ProviderGender::Male),
            "n/a" | "na" | "not-applicable" | "not applicable" => {
                Some(ProviderGender::NotApplicable)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderContact {
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

/// Immutable directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub provider_type: ProviderType,
    pub specialty: String,
    pub organization: String,
    pub languages: Vec<String>,
    pub gender: ProviderGender,
    pub state: String,
    pub accepting_new_patients: bool,
    pub rating: f32,
    pub review_count: u32,
    pub accessibility: Vec<String>,
    pub contact: ProviderContact,
}

impl Provider {
    pub fn speaks(&self, language: &str) -> bool {
        self.languages
            .iter()
            .any(|spoken| spoken.eq_ignore_ascii_case(language))
    }
}
