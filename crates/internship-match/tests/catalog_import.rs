use internship_match::catalog::{CatalogError, CatalogLoader};

const CATALOG: &[u8] = include_bytes!("../../../data/internships.csv");

#[test]
fn bundled_catalog_loads_and_drops_rows_without_skills() {
    let catalog = CatalogLoader::from_reader(CATALOG).expect("bundled catalog imports");

    assert_eq!(catalog.len(), 13);
    assert!(catalog
        .postings()
        .iter()
        .all(|posting| !posting.required_skills.is_empty()));
    assert!(catalog
        .postings()
        .iter()
        .all(|posting| posting.internship_id != "INT-1010"));
}

#[test]
fn bundled_catalog_normalizes_text_and_stipends() {
    let catalog = CatalogLoader::from_reader(CATALOG).expect("bundled catalog imports");
    let find = |id: &str| {
        catalog
            .postings()
            .iter()
            .find(|posting| posting.internship_id == id)
            .expect("posting present")
    };

    let analyst = find("INT-1001");
    assert_eq!(analyst.title, "Data Analyst Intern");
    assert_eq!(analyst.required_education, "b.tech");
    assert_eq!(analyst.location, "delhi ncr");
    assert_eq!(analyst.sector, "information technology");
    assert_eq!(analyst.stipend, 15000);
    assert_eq!(
        analyst.details.get("duration").map(String::as_str),
        Some("3 months")
    );

    assert_eq!(find("INT-1003").stipend, 8000);
    assert_eq!(find("INT-1006").stipend, 0);
    assert_eq!(find("INT-1008").stipend, 25000);
}

#[test]
fn bundled_catalog_vocabulary_is_lowercase() {
    let catalog = CatalogLoader::from_reader(CATALOG).expect("bundled catalog imports");
    let vocabulary = catalog.vocabulary();

    assert_eq!(vocabulary.len(), 21);
    assert!(vocabulary.contains("machine learning"));
    assert!(vocabulary.contains("ms office"));
    assert!(!vocabulary.contains("Python"));
}

#[test]
fn malformed_catalog_is_rejected() {
    let csv = "id,title\n1,Intern\n";
    let error = CatalogLoader::from_reader(csv.as_bytes()).expect_err("schema mismatch");
    assert!(matches!(error, CatalogError::MissingColumn("internship_id")));
}
