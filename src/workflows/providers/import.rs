use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::domain::{Provider, ProviderContact, ProviderGender, ProviderType};

#[derive(Debug, thiserror::Error)]
pub enum ProviderImportError {
    #[error("failed to read provider export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid provider CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown provider type {value:?}")]
    UnknownType { row: usize, value: String },
    #[error("row {row}: unknown provider gender {value:?}")]
    UnknownGender { row: usize, value: String },
    #[error("row {row}: rating {rating} is outside 0-5")]
    RatingOutOfRange { row: usize, rating: f32 },
    #[error("duplicate provider id {0}")]
    DuplicateId(String),
}

#[derive(Debug, Deserialize)]
struct ProviderRow {
    id: String,
    name: String,
    #[serde(rename = "type")]
    provider_type: String,
    specialty: String,
    organization: String,
    #[serde(default, deserialize_with = "semicolon_list")]
    languages: Vec<String>,
    gender: String,
    state: String,
    #[serde(deserialize_with = "yes_no")]
    accepting_new_patients: bool,
    rating: f32,
    #[serde(default)]
    review_count: u32,
    #[serde(default, deserialize_with = "semicolon_list")]
    accessibility: Vec<String>,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    zip: String,
}

impl ProviderRow {
    fn into_provider(self, row: usize) -> Result<Provider, ProviderImportError> {
        let provider_type =
            ProviderType::parse(&self.provider_type).ok_or_else(|| ProviderImportError::UnknownType {
                row,
                value: self.provider_type.clone(),
            })?;
        let gender = ProviderGender::parse(&self.gender).ok_or_else(|| {
            ProviderImportError::UnknownGender {
                row,
                value: self.gender.clone(),
            }
        })?;
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ProviderImportError::RatingOutOfRange {
                row,
                rating: self.rating,
            });
        }

        Ok(Provider {
            id: self.id,
            name: self.name,
            provider_type,
            specialty: self.specialty,
            organization: self.organization,
            languages: self.languages,
            gender,
            state: self.state.to_ascii_uppercase(),
            accepting_new_patients: self.accepting_new_patients,
            rating: self.rating,
            review_count: self.review_count,
            accessibility: self.accessibility,
            contact: ProviderContact {
                phone: self.phone,
                address: self.address,
                city: self.city,
                zip: self.zip,
            },
        })
    }
}

/// Rows are numbered from 1, excluding the header line.
pub(crate) fn parse_providers<R: Read>(reader: R) -> Result<Vec<Provider>, ProviderImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut providers = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProviderRow>().enumerate() {
        let row = record?;
        providers.push(row.into_provider(index + 1)?);
    }

    Ok(providers)
}

fn semicolon_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}

fn yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected yes/no for accepting_new_patients, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,type,specialty,organization,languages,gender,state,accepting_new_patients,rating,review_count,accessibility,phone,address,city,zip\n";

    #[test]
    fn parses_lists_and_flags() {
        let csv = format!(
            "{HEADER}p-1,Dr. Ada Park,Primary Care Physician,Family Medicine,Northside Clinic,English; Korean,Female,ny,yes,4.5,12,Wheelchair Accessible,(212) 555-0100,1 Main St,Albany,12207\n"
        );

        let providers = parse_providers(csv.as_bytes()).expect("valid export");
        assert_eq!(providers.len(), 1);
        let provider = &providers[0];
        assert_eq!(provider.provider_type, ProviderType::PrimaryCare);
        assert_eq!(provider.languages, vec!["English", "Korean"]);
        assert_eq!(provider.state, "NY");
        assert!(provider.accepting_new_patients);
        assert_eq!(provider.contact.city, "Albany");
    }

    #[test]
    fn rejects_unknown_type_with_row_number() {
        let csv = format!(
            "{HEADER}p-1,Clinic,Veterinary,Cats,Vet Co,English,N/A,TX,no,4.0,1,,,,,\n"
        );

        match parse_providers(csv.as_bytes()) {
            Err(ProviderImportError::UnknownType { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "Veterinary");
            }
            other => panic!("expected unknown type error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_rating_above_five() {
        let csv = format!(
            "{HEADER}p-1,Clinic,Hospital,General,Health Co,English,N/A,TX,no,5.5,1,,,,,\n"
        );

        assert!(matches!(
            parse_providers(csv.as_bytes()),
            Err(ProviderImportError::RatingOutOfRange { row: 1, .. })
        ));
    }
}
