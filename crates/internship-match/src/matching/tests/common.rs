use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::matching::{
    CandidateProfile, CandidateRequest, MatchEngine, MatchPolicy, Posting, ScoredMatch, SkillSet,
};

pub(super) fn posting(
    id: &str,
    education: &str,
    skills: &str,
    sector: &str,
    location: &str,
) -> Posting {
    Posting {
        internship_id: id.to_string(),
        title: format!("{id} intern"),
        company_name: "Acme Labs".to_string(),
        required_education: education.to_string(),
        required_skills: SkillSet::parse(skills),
        sector: sector.to_string(),
        location: location.to_string(),
        stipend: 10000,
        details: BTreeMap::new(),
    }
}

pub(super) fn request(
    qualification: &str,
    skills: &str,
    sector: &str,
    location: &str,
) -> CandidateRequest {
    CandidateRequest {
        qualification: qualification.to_string(),
        skills: skills.to_string(),
        sector_interested: sector.to_string(),
        location_interested: location.to_string(),
    }
}

pub(super) fn profile_for(catalog: &Catalog, request: &CandidateRequest) -> CandidateProfile {
    CandidateProfile::from_request(request, catalog.vocabulary())
}

pub(super) fn engine() -> MatchEngine {
    MatchEngine::new(MatchPolicy::default())
}

pub(super) fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        posting(
            "INT-001",
            "12th pass",
            "python, sql, excel",
            "information technology",
            "delhi ncr",
        ),
        posting("INT-002", "b.tech", "python, django", "information technology", "bengaluru"),
        posting("INT-003", "mba", "excel, marketing", "marketing", "mumbai"),
        posting("INT-004", "10th pass", "communication", "retail", "delhi"),
        posting("INT-005", "diploma", "autocad", "construction", "pune"),
        posting("INT-006", "phd", "excel", "finance", "delhi"),
    ])
}

pub(super) fn ids(matches: &[ScoredMatch<'_>]) -> Vec<String> {
    matches
        .iter()
        .map(|scored| scored.posting.internship_id.clone())
        .collect()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
