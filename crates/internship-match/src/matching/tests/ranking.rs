use super::common::*;
use crate::matching::{rank_and_select, Posting, ScoredMatch};

fn scored<'a>(postings: &'a [Posting], scores: &[f64]) -> Vec<ScoredMatch<'a>> {
    postings
        .iter()
        .zip(scores)
        .map(|(posting, score)| ScoredMatch {
            posting,
            score: *score,
            components: Vec::new(),
        })
        .collect()
}

fn five_postings() -> Vec<Posting> {
    ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(|id| posting(id, "ba", "excel", "finance", "pune"))
        .collect()
}

#[test]
fn top_three_keeps_ties_in_catalog_order() {
    let postings = five_postings();
    let ranked = rank_and_select(scored(&postings, &[40.0, 40.0, 25.0, 10.0, 0.0]), 3);

    assert_eq!(ids(&ranked), vec!["A", "B", "C"]);
    let scores: Vec<f64> = ranked.iter().map(|entry| entry.score).collect();
    assert_eq!(scores, vec![40.0, 40.0, 25.0]);
}

#[test]
fn ties_keep_relative_order_after_higher_entries() {
    let postings = five_postings();
    let ranked = rank_and_select(scored(&postings, &[10.0, 30.0, 10.0, 30.0, 20.0]), 5);

    assert_eq!(ids(&ranked), vec!["B", "D", "E", "A", "C"]);
}

#[test]
fn returns_everything_when_fewer_than_k() {
    let postings = five_postings();
    let ranked = rank_and_select(scored(&postings[..2], &[5.0, 12.5]), 5);

    assert_eq!(ids(&ranked), vec!["B", "A"]);
}

#[test]
fn empty_input_yields_empty_shortlist() {
    let ranked = rank_and_select(Vec::new(), 3);
    assert!(ranked.is_empty());
}
