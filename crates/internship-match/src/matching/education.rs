use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::domain::normalize_text;

/// Position of a qualification on the education ladder; higher is more senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EducationRank(pub i8);

/// Rank assumed for a posting whose requirement is not on the ladder (no restriction).
pub const POSTING_DEFAULT_RANK: EducationRank = EducationRank(0);

/// Rank assumed for a candidate whose qualification is not on the ladder.
pub const CANDIDATE_DEFAULT_RANK: EducationRank = EducationRank(-1);

const LADDER: &[(&str, i8)] = &[
    ("10th pass", 0),
    ("12th pass", 1),
    ("diploma", 2),
    ("ba", 3),
    ("b.sc", 3),
    ("b.com", 3),
    ("bba", 3),
    ("b.tech", 3),
    ("b.design", 3),
    ("b.pharma", 3),
    ("ma", 4),
    ("m.sc", 4),
    ("mba", 4),
    ("m.tech", 4),
    ("m.pharma", 4),
];

static LADDER_INDEX: OnceLock<HashMap<&'static str, EducationRank>> = OnceLock::new();

fn ladder_index() -> &'static HashMap<&'static str, EducationRank> {
    LADDER_INDEX.get_or_init(|| {
        LADDER
            .iter()
            .map(|(label, rank)| (*label, EducationRank(*rank)))
            .collect()
    })
}

/// Looks up a qualification label, returning `None` when it is not on the ladder.
pub fn lookup(label: &str) -> Option<EducationRank> {
    ladder_index().get(normalize_text(label).as_str()).copied()
}

pub fn rank_for_posting(label: &str) -> EducationRank {
    lookup(label).unwrap_or(POSTING_DEFAULT_RANK)
}

pub fn rank_for_candidate(label: &str) -> EducationRank {
    lookup(label).unwrap_or(CANDIDATE_DEFAULT_RANK)
}

/// Known labels in ascending rank order.
pub fn known_labels() -> impl Iterator<Item = (&'static str, EducationRank)> {
    LADDER
        .iter()
        .map(|(label, rank)| (*label, EducationRank(*rank)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_sorted_by_rank() {
        let ranks: Vec<EducationRank> = known_labels().map(|(_, rank)| rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn degree_tiers_share_a_rank() {
        assert_eq!(lookup("b.tech"), lookup("ba"));
        assert_eq!(lookup("mba"), lookup("m.pharma"));
        assert!(lookup("diploma") < lookup("b.com"));
        assert!(lookup("b.com") < lookup("m.sc"));
    }

    #[test]
    fn lookup_normalizes_case_and_spacing() {
        assert_eq!(lookup("  12TH   Pass "), Some(EducationRank(1)));
        assert_eq!(lookup("B.Tech"), Some(EducationRank(3)));
    }

    #[test]
    fn unknown_labels_use_asymmetric_defaults() {
        for label in ["", "phd", "b tech", "🎓"] {
            assert_eq!(rank_for_posting(label), POSTING_DEFAULT_RANK);
            assert_eq!(rank_for_candidate(label), CANDIDATE_DEFAULT_RANK);
        }
        assert!(CANDIDATE_DEFAULT_RANK < POSTING_DEFAULT_RANK);
    }
}
