use internship_match::catalog::{Catalog, CatalogLoader};
use internship_match::matching::{CandidateRequest, MatchEngine, MatchPolicy, TextMatch};

fn catalog() -> Catalog {
    CatalogLoader::from_reader(&include_bytes!("../../../data/internships.csv")[..])
        .expect("bundled catalog imports")
}

fn candidate() -> CandidateRequest {
    serde_json::from_value(serde_json::json!({
        "qualification": "B.Tech",
        "skills": "Python, Excel, SQL",
        "sector_interested": "",
        "location_interested": "Delhi"
    }))
    .expect("candidate request parses")
}

fn ids(shortlist: &[internship_match::matching::ScoredMatch<'_>]) -> Vec<String> {
    shortlist
        .iter()
        .map(|entry| entry.posting.internship_id.clone())
        .collect()
}

#[test]
fn default_policy_returns_top_five_with_stable_ties() {
    let catalog = catalog();
    let engine = MatchEngine::default();

    let shortlist = engine.recommend(&catalog, &candidate());

    assert_eq!(
        ids(&shortlist),
        vec!["INT-1001", "INT-1002", "INT-1013", "INT-1006", "INT-1003"]
    );
    assert!((shortlist[0].score - 65.0).abs() < 1e-9);
    assert!((shortlist[2].score - 30.0).abs() < 1e-9);

    let wider = engine.recommend_top(&catalog, &candidate(), 6);
    assert_eq!(wider[4].posting.internship_id, "INT-1003");
    assert_eq!(wider[5].posting.internship_id, "INT-1012");
    assert_eq!(wider[4].score, wider[5].score);
}

#[test]
fn senior_postings_are_withheld_from_bachelor_candidates() {
    let catalog = catalog();
    let shortlist = MatchEngine::default().recommend_top(&catalog, &candidate(), 20);

    let listed = ids(&shortlist);
    assert!(!listed.contains(&"INT-1008".to_string()));
    assert!(!listed.contains(&"INT-1014".to_string()));
}

#[test]
fn exact_text_policy_drops_region_bonus() {
    let catalog = catalog();
    let engine = MatchEngine::new(MatchPolicy {
        text_match: TextMatch::Exact,
        ..MatchPolicy::default()
    });

    let shortlist = engine.recommend(&catalog, &candidate());

    assert_eq!(shortlist[0].posting.internship_id, "INT-1001");
    assert!((shortlist[0].score - 55.0).abs() < 1e-9);
    assert!(shortlist
        .iter()
        .all(|entry| entry.posting.internship_id != "INT-1013" || entry.score < 30.0));
}

#[test]
fn shortlist_json_matches_response_shape() {
    let catalog = catalog();
    let shortlist = MatchEngine::default().recommend(&catalog, &candidate());

    let body = serde_json::to_value(&shortlist).expect("serializes");
    let first = &body[0];
    assert_eq!(first["internship_id"], "INT-1001");
    assert_eq!(first["company_name"], "Infosys");
    assert_eq!(first["duration"], "3 months");
    assert_eq!(first["required_skills"], serde_json::json!(["excel", "python", "sql"]));
    assert_eq!(first["score"], 65.0);
}
