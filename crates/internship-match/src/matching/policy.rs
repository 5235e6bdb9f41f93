use serde::{Deserialize, Serialize};

pub const WEIGHT_SKILL: f64 = 15.0;
pub const WEIGHT_SKILL_PERCENTAGE: f64 = 10.0;
pub const WEIGHT_LOCATION: f64 = 10.0;
pub const WEIGHT_SECTOR: f64 = 5.0;

pub const DEFAULT_TOP_K: usize = 5;
pub const MAX_TOP_K: usize = 20;

/// Points awarded per scoring dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Awarded once per matched skill.
    pub skill: f64,
    /// Scaled by the fraction of required skills the candidate covers.
    pub skill_coverage: f64,
    pub location: f64,
    pub sector: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: WEIGHT_SKILL,
            skill_coverage: WEIGHT_SKILL_PERCENTAGE,
            location: WEIGHT_LOCATION,
            sector: WEIGHT_SECTOR,
        }
    }
}

/// How a candidate preference is compared against a posting attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMatch {
    /// Preference must appear within the posting value ("delhi" matches "delhi ncr").
    Substring,
    /// Preference must equal the posting value.
    Exact,
}

impl TextMatch {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "substring" | "contains" => Some(Self::Substring),
            "exact" | "equal" => Some(Self::Exact),
            _ => None,
        }
    }

    /// Both sides are expected to be normalized. An empty preference never matches.
    pub fn matches(self, preference: &str, value: &str) -> bool {
        if preference.is_empty() {
            return false;
        }

        match self {
            Self::Substring => value.contains(preference),
            Self::Exact => value == preference,
        }
    }
}

/// Rubric configuration for the match engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPolicy {
    pub weights: ScoringWeights,
    pub text_match: TextMatch,
    /// Exclude postings sharing no skill with a candidate who listed skills.
    pub skill_gate: bool,
    pub top_k: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            text_match: TextMatch::Substring,
            skill_gate: true,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl MatchPolicy {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = clamp_top_k(top_k);
        self
    }
}

pub fn clamp_top_k(top_k: usize) -> usize {
    top_k.clamp(1, MAX_TOP_K)
}
