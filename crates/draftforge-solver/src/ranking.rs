//! Sibling ordering for both rank goals.
//!
//! Every ordering ends on the champion name, which is unique within one
//! node's candidates, so sorts are total and builds are reproducible.

use std::cmp::Ordering;

use draftforge_core::Champion;
use draftforge_scoring::CandidateScore;

use crate::node::TreeNode;

/// A legal candidate with its incremental score.
#[derive(Debug, Clone)]
pub(crate) struct Ranked<'a> {
    pub champion: &'a Champion,
    pub scored: CandidateScore,
    pub passes_min_score: bool,
}

/// Candidate score descending, then champion name ascending.
pub(crate) fn by_candidate_score(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    b.scored
        .score
        .cmp(&a.scored.score)
        .then_with(|| a.champion.name.cmp(&b.champion.name))
}

/// Valid leaves descending, then candidate score descending, then name.
pub(crate) fn by_valid_end_states(a: &TreeNode, b: &TreeNode) -> Ordering {
    b.branch_potential
        .valid_leaf_count
        .cmp(&a.branch_potential.valid_leaf_count)
        .then_with(|| candidate_score(b).cmp(&candidate_score(a)))
        .then_with(|| a.added_champion().cmp(&b.added_champion()))
}

fn candidate_score(node: &TreeNode) -> u32 {
    node.pick.as_ref().map_or(0, |p| p.candidate_score)
}
