use std::fs;

use coverage_intake::workflows::providers::{
    FilterCriteria, ProviderDirectory, ProviderGender, ProviderImportError, ProviderSearch,
    ProviderType,
};
use tempfile::TempDir;

const EXPORT: &str = "\
id,name,type,specialty,organization,languages,gender,state,accepting_new_patients,rating,review_count,accessibility,phone,address,city,zip
d-1,Dr. Ana Ruiz,Primary Care Physician,Family Medicine,Valley Health,English;Spanish,Female,CA,yes,4.6,40,Wheelchair Accessible,(559) 555-0101,10 Fulton St,Fresno,93721
d-2,Valley Urgent Care,urgent-care,Walk-in Care,Valley Health,English,N/A,CA,yes,3.9,210,,(559) 555-0102,20 Fulton St,Fresno,93721
d-3,Dr. Ben Kim,Dentist,General Dentistry,Smile Co,English;Korean,Male,NY,no,4.1,12,,(212) 555-0103,30 Canal St,New York,10013
";

#[test]
fn imported_directory_drives_search() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("providers.csv");
    fs::write(&path, EXPORT).expect("write export");

    let directory = ProviderDirectory::from_path(&path).expect("export imports");
    assert_eq!(directory.len(), 3);
    assert_eq!(directory.states(), vec!["CA", "NY"]);
    assert_eq!(
        directory.find("d-2").map(|p| p.provider_type),
        Some(ProviderType::UrgentCare)
    );
    assert_eq!(
        directory.find("d-2").map(|p| p.gender),
        Some(ProviderGender::NotApplicable)
    );

    let mut search = ProviderSearch::new(&directory, 2);
    assert_eq!(search.current_page().total_pages, 2);
    search.go_to_page(2);

    search.update(|criteria| criteria.search_term = "valley".to_string());
    let page = search.current_page();
    assert_eq!(page.page_number, 1);
    let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["d-1", "d-2"]);

    search.set_criteria(FilterCriteria {
        language: Some("Korean".to_string()),
        accepting_new_patients: true,
        ..FilterCriteria::default()
    });
    let empty = search.current_page();
    assert!(empty.items.is_empty());
    assert_eq!(empty.total_pages, 0);
    assert_eq!(empty.page_number, 1);
}

#[test]
fn missing_export_is_an_io_error() {
    let dir = TempDir::new().expect("temp dir");
    match ProviderDirectory::from_path(dir.path().join("absent.csv")) {
        Err(ProviderImportError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn unknown_gender_is_rejected() {
    let export = EXPORT.replace("Male,NY", "Unknown,NY");
    match ProviderDirectory::from_csv_reader(export.as_bytes()) {
        Err(ProviderImportError::UnknownGender { row, value }) => {
            assert_eq!(row, 3);
            assert_eq!(value, "Unknown");
        }
        other => panic!("expected unknown gender error, got {other:?}"),
    }
}
