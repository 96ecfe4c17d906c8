use super::domain::{Provider, ProviderContact, ProviderGender, ProviderType};
use ProviderGender::{Female, Male, NotApplicable};
use ProviderType::*;

struct Seed {
    id: &'static str,
    name: &'static str,
    provider_type: ProviderType,
    specialty: &'static str,
    organization: &'static str,
    languages: &'static [&'static str],
    gender: ProviderGender,
    state: &'static str,
    accepting: bool,
    rating: f32,
    reviews: u32,
    accessibility: &'static [&'static str],
    phone: &'static str,
    address: &'static str,
    city: &'static str,
    zip: &'static str,
}

impl From<&Seed> for Provider {
    fn from(seed: &Seed) -> Self {
        Provider {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            provider_type: seed.provider_type,
            specialty: seed.specialty.to_string(),
            organization: seed.organization.to_string(),
            languages: seed.languages.iter().map(|l| l.to_string()).collect(),
            gender: seed.gender,
            state: seed.state.to_string(),
            accepting_new_patients: seed.accepting,
            rating: seed.rating,
            review_count: seed.reviews,
            accessibility: seed.accessibility.iter().map(|a| a.to_string()).collect(),
            contact: ProviderContact {
                phone: seed.phone.to_string(),
                address: seed.address.to_string(),
                city: seed.city.to_string(),
                zip: seed.zip.to_string(),
            },
        }
    }
}

const WHEELCHAIR: &str = "Wheelchair Accessible";
const PARKING: &str = "Accessible Parking";
const INTERPRETER: &str = "Sign Language Interpreter";
const TELEHEALTH: &str = "Telehealth Available";

const SEEDS: &[Seed] = &[
    Seed {
        id: "prov-001",
        name: "Dr. Maria Gonzalez",
        provider_type: PrimaryCare,
        specialty: "Family Medicine",
        organization: "Sunrise Community Health",
        languages: &["English", "Spanish"],
        gender: Female,
        state: "CA",
        accepting: true,
        rating: 4.8,
        reviews: 214,
        accessibility: &[WHEELCHAIR, PARKING],
        phone: "(213) 555-0142",
        address: "1200 Wilshire Blvd",
        city: "Los Angeles",
        zip: "90017",
    },
    Seed {
        id: "prov-002",
        name: "Dr. James Whitaker",
        provider_type: PrimaryCare,
        specialty: "Internal Medicine",
        organization: "Lone Star Medical Group",
        languages: &["English"],
        gender: Male,
        state: "TX",
        accepting: false,
        rating: 4.2,
        reviews: 98,
        accessibility: &[WHEELCHAIR],
        phone: "(512) 555-0177",
        address: "800 Congress Ave",
        city: "Austin",
        zip: "78701",
    },
    Seed {
        id: "prov-003",
        name: "Dr. Linh Tran",
        provider_type: PrimaryCare,
        specialty: "Pediatrics",
        organization: "Bayou Kids Clinic",
        languages: &["English", "Vietnamese"],
        gender: Female,
        state: "TX",
        accepting: true,
        rating: 4.9,
        reviews: 321,
        accessibility: &[WHEELCHAIR, PARKING, TELEHEALTH],
        phone: "(713) 555-0108",
        address: "4410 Bellaire Blvd",
        city: "Houston",
        zip: "77025",
    },
    Seed {
        id: "prov-004",
        name: "Dr. Samuel Okafor",
        provider_type: Specialist,
        specialty: "Cardiology",
        organization: "Empire Heart Institute",
        languages: &["English", "French"],
        gender: Male,
        state: "NY",
        accepting: true,
        rating: 4.7,
        reviews: 156,
        accessibility: &[WHEELCHAIR, INTERPRETER],
        phone: "(212) 555-0190",
        address: "525 E 68th St",
        city: "New York",
        zip: "10065",
    },
    Seed {
        id: "prov-005",
        name: "Dr. Priya Raman",
        provider_type: Specialist,
        specialty: "Endocrinology",
        organization: "Gulf Coast Specialty Care",
        languages: &["English", "Hindi", "Tamil"],
        gender: Female,
        state: "FL",
        accepting: true,
        rating: 4.6,
        reviews: 87,
        accessibility: &[PARKING, TELEHEALTH],
        phone: "(813) 555-0123",
        address: "2 Tampa General Cir",
        city: "Tampa",
        zip: "33606",
    },
    Seed {
        id: "prov-006",
        name: "Dr. Robert Chen",
        provider_type: Specialist,
        specialty: "Dermatology",
        organization: "Pacific Skin Associates",
        languages: &["English", "Mandarin"],
        gender: Male,
        state: "CA",
        accepting: false,
        rating: 4.4,
        reviews: 203,
        accessibility: &[WHEELCHAIR],
        phone: "(415) 555-0161",
        address: "350 Parnassus Ave",
        city: "San Francisco",
        zip: "94117",
    },
    Seed {
        id: "prov-007",
        name: "St. Vincent Regional Hospital",
        provider_type: Hospital,
        specialty: "General Acute Care",
        organization: "St. Vincent Health System",
        languages: &["English", "Spanish"],
        gender: NotApplicable,
        state: "AL",
        accepting: true,
        rating: 4.1,
        reviews: 1_204,
        accessibility: &[WHEELCHAIR, PARKING, INTERPRETER],
        phone: "(205) 555-0100",
        address: "810 St Vincent's Dr",
        city: "Birmingham",
        zip: "35205",
    },
    Seed {
        id: "prov-008",
        name: "Harborview Medical Center",
        provider_type: Hospital,
        specialty: "Trauma Center",
        organization: "Harborview Health",
        languages: &["English", "Spanish", "Mandarin"],
        gender: NotApplicable,
        state: "NY",
        accepting: true,
        rating: 3.9,
        reviews: 2_310,
        accessibility: &[WHEELCHAIR, PARKING, INTERPRETER],
        phone: "(718) 555-0111",
        address: "150 55th St",
        city: "Brooklyn",
        zip: "11220",
    },
    Seed {
        id: "prov-009",
        name: "QuickCare Urgent Clinic",
        provider_type: UrgentCare,
        specialty: "Walk-in Care",
        organization: "QuickCare",
        languages: &["English", "Spanish"],
        gender: NotApplicable,
        state: "FL",
        accepting: true,
        rating: 4.0,
        reviews: 512,
        accessibility: &[WHEELCHAIR, PARKING],
        phone: "(305) 555-0133",
        address: "7400 SW 8th St",
        city: "Miami",
        zip: "33144",
    },
    Seed {
        id: "prov-010",
        name: "Capital Express Care",
        provider_type: UrgentCare,
        specialty: "Walk-in Care",
        organization: "Lone Star Medical Group",
        languages: &["English"],
        gender: NotApplicable,
        state: "TX",
        accepting: true,
        rating: 3.7,
        reviews: 264,
        accessibility: &[PARKING],
        phone: "(512) 555-0150",
        address: "3801 S Lamar Blvd",
        city: "Austin",
        zip: "78704",
    },
    Seed {
        id: "prov-011",
        name: "Community Pharmacy Plus",
        provider_type: Pharmacy,
        specialty: "Retail Pharmacy",
        organization: "Community Pharmacy Plus",
        languages: &["English", "Spanish"],
        gender: NotApplicable,
        state: "CA",
        accepting: true,
        rating: 4.3,
        reviews: 189,
        accessibility: &[WHEELCHAIR],
        phone: "(619) 555-0115",
        address: "900 Market St",
        city: "San Diego",
        zip: "92101",
    },
    Seed {
        id: "prov-012",
        name: "Magnolia Drug Store",
        provider_type: Pharmacy,
        specialty: "Compounding Pharmacy",
        organization: "Magnolia Drug Store",
        languages: &["English"],
        gender: NotApplicable,
        state: "AL",
        accepting: true,
        rating: 4.6,
        reviews: 74,
        accessibility: &[PARKING],
        phone: "(334) 555-0172",
        address: "45 Dexter Ave",
        city: "Montgomery",
        zip: "36104",
    },
    Seed {
        id: "prov-013",
        name: "Dr. Aisha Bello",
        provider_type: Dentist,
        specialty: "General Dentistry",
        organization: "Bright Smiles Dental",
        languages: &["English", "Yoruba"],
        gender: Female,
        state: "NY",
        accepting: true,
        rating: 4.8,
        reviews: 142,
        accessibility: &[WHEELCHAIR],
        phone: "(212) 555-0144",
        address: "60 W 125th St",
        city: "New York",
        zip: "10027",
    },
    Seed {
        id: "prov-014",
        name: "Dr. Carlos Medina",
        provider_type: Dentist,
        specialty: "Pediatric Dentistry",
        organization: "Little Teeth Dental",
        languages: &["English", "Spanish"],
        gender: Male,
        state: "FL",
        accepting: false,
        rating: 4.5,
        reviews: 66,
        accessibility: &[PARKING],
        phone: "(407) 555-0126",
        address: "1500 E Colonial Dr",
        city: "Orlando",
        zip: "32803",
    },
    Seed {
        id: "prov-015",
        name: "ClearView Eye Associates",
        provider_type: EyeCare,
        specialty: "Optometry",
        organization: "ClearView Eye Associates",
        languages: &["English", "Korean"],
        gender: NotApplicable,
        state: "CA",
        accepting: true,
        rating: 4.4,
        reviews: 118,
        accessibility: &[WHEELCHAIR, PARKING],
        phone: "(213) 555-0187",
        address: "3250 Wilshire Blvd",
        city: "Los Angeles",
        zip: "90010",
    },
    Seed {
        id: "prov-016",
        name: "Dr. Hannah Weiss",
        provider_type: EyeCare,
        specialty: "Ophthalmology",
        organization: "Hudson Vision Center",
        languages: &["English", "Hebrew"],
        gender: Female,
        state: "NY",
        accepting: true,
        rating: 4.9,
        reviews: 95,
        accessibility: &[WHEELCHAIR],
        phone: "(914) 555-0139",
        address: "12 Main St",
        city: "White Plains",
        zip: "10601",
    },
    Seed {
        id: "prov-017",
        name: "Motion Physical Therapy",
        provider_type: PhysicalTherapy,
        specialty: "Sports Rehabilitation",
        organization: "Motion PT",
        languages: &["English"],
        gender: NotApplicable,
        state: "TX",
        accepting: true,
        rating: 4.7,
        reviews: 133,
        accessibility: &[WHEELCHAIR, PARKING],
        phone: "(214) 555-0158",
        address: "2600 N Central Expy",
        city: "Dallas",
        zip: "75204",
    },
    Seed {
        id: "prov-018",
        name: "Dr. Kevin Brooks, DPT",
        provider_type: PhysicalTherapy,
        specialty: "Orthopedic Rehabilitation",
        organization: "Southern Mobility Clinic",
        languages: &["English"],
        gender: Male,
        state: "AL",
        accepting: false,
        rating: 4.2,
        reviews: 41,
        accessibility: &[WHEELCHAIR],
        phone: "(256) 555-0164",
        address: "101 Clinton Ave W",
        city: "Huntsville",
        zip: "35801",
    },
    Seed {
        id: "prov-019",
        name: "Dr. Elena Petrova",
        provider_type: MentalHealth,
        specialty: "Psychiatry",
        organization: "Mindful Path Behavioral Health",
        languages: &["English", "Russian"],
        gender: Female,
        state: "NY",
        accepting: true,
        rating: 4.6,
        reviews: 77,
        accessibility: &[TELEHEALTH],
        phone: "(646) 555-0181",
        address: "230 Park Ave S",
        city: "New York",
        zip: "10003",
    },
    Seed {
        id: "prov-020",
        name: "Marcus Reed, LCSW",
        provider_type: MentalHealth,
        specialty: "Counseling",
        organization: "Open Door Counseling",
        languages: &["English", "Spanish"],
        gender: Male,
        state: "FL",
        accepting: true,
        rating: 4.8,
        reviews: 59,
        accessibility: &[WHEELCHAIR, TELEHEALTH],
        phone: "(904) 555-0119",
        address: "33 W Adams St",
        city: "Jacksonville",
        zip: "32202",
    },
    Seed {
        id: "prov-021",
        name: "Dr. Nina Alvarez, DC",
        provider_type: Chiropractor,
        specialty: "Spinal Adjustment",
        organization: "Align Chiropractic",
        languages: &["English", "Spanish"],
        gender: Female,
        state: "CA",
        accepting: true,
        rating: 4.5,
        reviews: 102,
        accessibility: &[PARKING],
        phone: "(916) 555-0147",
        address: "1515 K St",
        city: "Sacramento",
        zip: "95814",
    },
    Seed {
        id: "prov-022",
        name: "Dr. Thomas Grady, DC",
        provider_type: Chiropractor,
        specialty: "Sports Chiropractic",
        organization: "Peak Performance Chiropractic",
        languages: &["English"],
        gender: Male,
        state: "TX",
        accepting: false,
        rating: 3.8,
        reviews: 37,
        accessibility: &[WHEELCHAIR],
        phone: "(210) 555-0193",
        address: "700 N St Mary's St",
        city: "San Antonio",
        zip: "78205",
    },
    Seed {
        id: "prov-023",
        name: "Dr. Mei Lin, LAc",
        provider_type: AlternativeMedicine,
        specialty: "Acupuncture",
        organization: "Harmony Integrative Health",
        languages: &["English", "Mandarin", "Cantonese"],
        gender: Female,
        state: "CA",
        accepting: true,
        rating: 4.7,
        reviews: 88,
        accessibility: &[WHEELCHAIR],
        phone: "(415) 555-0175",
        address: "880 Clay St",
        city: "San Francisco",
        zip: "94108",
    },
    Seed {
        id: "prov-024",
        name: "Riverbend Naturopathic Clinic",
        provider_type: AlternativeMedicine,
        specialty: "Naturopathy",
        organization: "Riverbend Wellness",
        languages: &["English"],
        gender: NotApplicable,
        state: "AL",
        accepting: true,
        rating: 4.1,
        reviews: 29,
        accessibility: &[PARKING],
        phone: "(251) 555-0138",
        address: "62 Dauphin St",
        city: "Mobile",
        zip: "36602",
    },
    Seed {
        id: "prov-025",
        name: "Grace Okoye, RDN",
        provider_type: Nutrition,
        specialty: "Diabetes Nutrition",
        organization: "Nourish Nutrition Services",
        languages: &["English", "Igbo"],
        gender: Female,
        state: "FL",
        accepting: true,
        rating: 4.9,
        reviews: 64,
        accessibility: &[TELEHEALTH],
        phone: "(305) 555-0152",
        address: "1111 Brickell Ave",
        city: "Miami",
        zip: "33131",
    },
    Seed {
        id: "prov-026",
        name: "Daniel Ortiz, RD",
        provider_type: Nutrition,
        specialty: "Pediatric Nutrition",
        organization: "Sunrise Community Health",
        languages: &["English", "Spanish"],
        gender: Male,
        state: "CA",
        accepting: false,
        rating: 4.3,
        reviews: 22,
        accessibility: &[WHEELCHAIR, TELEHEALTH],
        phone: "(213) 555-0169",
        address: "1200 Wilshire Blvd",
        city: "Los Angeles",
        zip: "90017",
    },
];

pub(super) fn providers() -> Vec<Provider> {
    SEEDS.iter().map(Provider::from).collect()
}
