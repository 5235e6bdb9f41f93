use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, Posting};
use super::education::{rank_for_candidate, rank_for_posting, EducationRank};
use super::policy::MatchPolicy;

/// Why a posting was left out of a candidate's shortlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Candidate listed skills and none of them are required by the posting.
    NoSkillOverlap,
    /// Candidate's qualification ranks below the posting's requirement.
    Ineligible {
        required: EducationRank,
        actual: EducationRank,
    },
    /// Posting passed every gate but earned no points.
    NoSignal,
}

impl ExclusionReason {
    pub fn summary(&self) -> String {
        match self {
            ExclusionReason::NoSkillOverlap => "no overlap with the listed skills".to_string(),
            ExclusionReason::Ineligible { required, actual } => format!(
                "requires education rank {} (candidate has {})",
                required.0, actual.0
            ),
            ExclusionReason::NoSignal => "no matching preferences".to_string(),
        }
    }
}

pub(crate) fn check_gates(
    candidate: &CandidateProfile,
    posting: &Posting,
    policy: &MatchPolicy,
) -> Result<(), ExclusionReason> {
    // postings without listed skills cannot fail the overlap check
    if policy.skill_gate
        && candidate.skills_supplied
        && !posting.required_skills.is_empty()
        && candidate.skills.overlap(&posting.required_skills) == 0
    {
        return Err(ExclusionReason::NoSkillOverlap);
    }

    let required = rank_for_posting(&posting.required_education);
    let actual = rank_for_candidate(&candidate.qualification);
    if actual < required {
        return Err(ExclusionReason::Ineligible { required, actual });
    }

    Ok(())
}
