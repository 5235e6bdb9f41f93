use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, Posting};
use super::policy::MatchPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    Location,
    Sector,
    SkillOverlap,
    SkillCoverage,
}

/// Discrete contribution to a match score, kept for explanations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub points: f64,
    pub notes: String,
}

pub(crate) fn score_posting(
    candidate: &CandidateProfile,
    posting: &Posting,
    policy: &MatchPolicy,
) -> (Vec<ScoreComponent>, f64) {
    let weights = &policy.weights;
    let mut components = Vec::new();
    let mut total = 0.0;

    if policy
        .text_match
        .matches(&candidate.location, &posting.location)
    {
        components.push(ScoreComponent {
            factor: MatchFactor::Location,
            points: weights.location,
            notes: format!("'{}' matches {}", candidate.location, posting.location),
        });
        total += weights.location;
    }

    if policy.text_match.matches(&candidate.sector, &posting.sector) {
        components.push(ScoreComponent {
            factor: MatchFactor::Sector,
            points: weights.sector,
            notes: format!("'{}' matches {}", candidate.sector, posting.sector),
        });
        total += weights.sector;
    }

    let required = posting.required_skills.len();
    let matched = candidate.skills.overlap(&posting.required_skills);
    if required > 0 && matched > 0 {
        let overlap_points = matched as f64 * weights.skill;
        components.push(ScoreComponent {
            factor: MatchFactor::SkillOverlap,
            points: overlap_points,
            notes: format!("{matched} of {required} required skill(s) matched"),
        });
        total += overlap_points;

        let coverage = matched as f64 / required as f64;
        let coverage_points = coverage * weights.skill_coverage;
        components.push(ScoreComponent {
            factor: MatchFactor::SkillCoverage,
            points: coverage_points,
            notes: format!("{:.0}% of requirements covered", coverage * 100.0),
        });
        total += coverage_points;
    }

    (components, total)
}
