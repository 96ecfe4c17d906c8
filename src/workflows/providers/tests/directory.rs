use crate::workflows::providers::{ProviderDirectory, ProviderImportError, ProviderType};

#[test]
fn builtin_directory_spans_every_provider_type() {
    let directory = ProviderDirectory::builtin();
    for kind in ProviderType::ALL {
        assert!(
            directory.providers().iter().any(|p| p.provider_type == kind),
            "no provider of type {}",
            kind.label()
        );
    }
}

#[test]
fn builtin_ids_are_unique() {
    let directory = ProviderDirectory::builtin();
    let rebuilt = ProviderDirectory::from_providers(directory.providers().to_vec());
    assert!(rebuilt.is_ok());
    assert_eq!(directory.len(), 26);
}

#[test]
fn lookup_by_unknown_id_is_absent() {
    let directory = ProviderDirectory::builtin();
    assert_eq!(
        directory.find("prov-004").map(|p| p.name.as_str()),
        Some("Dr. Samuel Okafor")
    );
    assert!(directory.find("prov-999").is_none());
}

#[test]
fn facet_values_are_unique_and_sorted() {
    let directory = ProviderDirectory::builtin();
    assert_eq!(directory.states(), vec!["AL", "CA", "FL", "NY", "TX"]);

    let languages = directory.languages();
    assert!(languages.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(languages.contains(&"Spanish"));

    let specialties = directory.specialties();
    assert_eq!(
        specialties.iter().filter(|s| **s == "Walk-in Care").count(),
        1
    );
}

#[test]
fn duplicate_ids_are_rejected_on_import() {
    let csv = "id,name,type,specialty,organization,languages,gender,state,accepting_new_patients,rating,review_count,accessibility,phone,address,city,zip\n\
p-1,Clinic A,Urgent Care,Walk-in Care,Care Co,English,N/A,CA,yes,4.0,3,,,,,\n\
p-1,Clinic B,Urgent Care,Walk-in Care,Care Co,English,N/A,CA,yes,4.2,8,,,,,\n";

    match ProviderDirectory::from_csv_reader(csv.as_bytes()) {
        Err(ProviderImportError::DuplicateId(id)) => assert_eq!(id, "p-1"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}
