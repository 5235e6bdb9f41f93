use super::ScoredMatch;

/// Orders matches by descending score and keeps the first `k`.
///
/// The sort is stable, so equal scores keep their catalog order and repeated
/// requests against the same catalog produce identical output.
pub fn rank_and_select(mut scored: Vec<ScoredMatch<'_>>, k: usize) -> Vec<ScoredMatch<'_>> {
    scored.sort_by(|left, right| right.score.total_cmp(&left.score));
    scored.truncate(k);
    scored
}
