//! Candidate-to-posting matching: gates, weighted scoring and top-K ranking.

pub mod domain;
pub mod education;
mod gates;
mod policy;
mod ranker;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    normalize_text, CandidateProfile, CandidateRequest, Posting, SkillSet, SkillVocabulary,
};
pub use education::{EducationRank, CANDIDATE_DEFAULT_RANK, POSTING_DEFAULT_RANK};
pub use gates::ExclusionReason;
pub use policy::{
    clamp_top_k, MatchPolicy, ScoringWeights, TextMatch, DEFAULT_TOP_K, MAX_TOP_K, WEIGHT_LOCATION,
    WEIGHT_SECTOR, WEIGHT_SKILL, WEIGHT_SKILL_PERCENTAGE,
};
pub use ranker::rank_and_select;
pub use rules::{MatchFactor, ScoreComponent};

use crate::catalog::Catalog;
use serde::Serialize;
use tracing::debug;

/// Outcome of evaluating one posting for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum MatchVerdict {
    Scored {
        score: f64,
        components: Vec<ScoreComponent>,
    },
    Excluded(ExclusionReason),
}

impl MatchVerdict {
    pub fn score(&self) -> Option<f64> {
        match self {
            MatchVerdict::Scored { score, .. } => Some(*score),
            MatchVerdict::Excluded(_) => None,
        }
    }
}

/// A posting that survived every gate, with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch<'a> {
    #[serde(flatten)]
    pub posting: &'a Posting,
    pub score: f64,
    #[serde(skip)]
    pub components: Vec<ScoreComponent>,
}

/// Per-posting verdicts for a single candidate, in catalog order.
#[derive(Debug, Clone)]
pub struct MatchExplanation<'a> {
    pub profile: CandidateProfile,
    pub verdicts: Vec<(&'a Posting, MatchVerdict)>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ExclusionTally {
    no_skill_overlap: usize,
    ineligible: usize,
    no_signal: usize,
}

impl ExclusionTally {
    fn record(&mut self, reason: &ExclusionReason) {
        match reason {
            ExclusionReason::NoSkillOverlap => self.no_skill_overlap += 1,
            ExclusionReason::Ineligible { .. } => self.ineligible += 1,
            ExclusionReason::NoSignal => self.no_signal += 1,
        }
    }
}

/// Stateless engine applying a [`MatchPolicy`] to a catalog snapshot.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    policy: MatchPolicy,
}

impl MatchEngine {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    pub fn score(&self, candidate: &CandidateProfile, posting: &Posting) -> MatchVerdict {
        if let Err(reason) = gates::check_gates(candidate, posting, &self.policy) {
            return MatchVerdict::Excluded(reason);
        }

        let (components, score) = rules::score_posting(candidate, posting, &self.policy);
        if score > 0.0 {
            MatchVerdict::Scored { score, components }
        } else {
            MatchVerdict::Excluded(ExclusionReason::NoSignal)
        }
    }

    pub fn explain<'a>(
        &self,
        catalog: &'a Catalog,
        request: &CandidateRequest,
    ) -> MatchExplanation<'a> {
        let profile = CandidateProfile::from_request(request, catalog.vocabulary());
        let verdicts = catalog
            .postings()
            .iter()
            .map(|posting| (posting, self.score(&profile, posting)))
            .collect();

        MatchExplanation { profile, verdicts }
    }

    /// Shortlist using the policy's configured `top_k`.
    pub fn recommend<'a>(
        &self,
        catalog: &'a Catalog,
        request: &CandidateRequest,
    ) -> Vec<ScoredMatch<'a>> {
        self.recommend_top(catalog, request, self.policy.top_k)
    }

    pub fn recommend_top<'a>(
        &self,
        catalog: &'a Catalog,
        request: &CandidateRequest,
        top_k: usize,
    ) -> Vec<ScoredMatch<'a>> {
        let MatchExplanation { profile, verdicts } = self.explain(catalog, request);

        let mut tally = ExclusionTally::default();
        let mut scored = Vec::new();
        for (posting, verdict) in verdicts {
            match verdict {
                MatchVerdict::Scored { score, components } => scored.push(ScoredMatch {
                    posting,
                    score,
                    components,
                }),
                MatchVerdict::Excluded(reason) => tally.record(&reason),
            }
        }

        let eligible = scored.len();
        let shortlist = rank_and_select(scored, top_k);

        debug!(
            postings = catalog.len(),
            eligible,
            returned = shortlist.len(),
            excluded_no_skill_overlap = tally.no_skill_overlap,
            excluded_ineligible = tally.ineligible,
            excluded_no_signal = tally.no_signal,
            unrecognized_skills = profile.unrecognized_skills.len(),
            "computed internship shortlist"
        );

        shortlist
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchPolicy::default())
    }
}
