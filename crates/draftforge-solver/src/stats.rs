//! Tree generation statistics.
//!
//! Subtree builds return their own [`GenerationStats`], and the parent
//! merges them, so parallel sibling builds never share a counter.

use std::ops::AddAssign;

use serde::Serialize;

use crate::node::BranchPotential;

/// Counters describing one possibility-tree build.
///
/// The work counters (`nodes_visited`, `pruned_*`, `fallback_*`) cover
/// every node expanded, including subtrees built only to rank siblings
/// and then truncated. `nodes_kept` and the leaf counters describe the
/// returned tree only.
///
/// # Example
///
/// ```
/// use draftforge_solver::GenerationStats;
///
/// let mut stats = GenerationStats::default();
/// stats.record_visit();
/// stats.record_visit();
/// stats.record_low_score_drops(3);
///
/// let mut other = GenerationStats::default();
/// other.record_fallback(2);
/// stats += other;
///
/// assert_eq!(stats.nodes_visited, 2);
/// assert_eq!(stats.pruned_low_candidate_score, 3);
/// assert_eq!(stats.fallback_nodes, 1);
/// assert_eq!(stats.fallback_candidates_used, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Nodes expanded, truncated ranking subtrees included.
    pub nodes_visited: usize,
    /// Nodes in the returned tree.
    pub nodes_kept: usize,
    /// Nodes that stopped expanding on an unreachable required check.
    pub pruned_unreachable: usize,
    /// Candidates dropped for scoring below the minimum.
    pub pruned_low_candidate_score: usize,
    /// Nodes where every candidate fell below the minimum.
    pub fallback_nodes: usize,
    /// Below-minimum children kept by the fallback.
    pub fallback_candidates_used: usize,
    pub complete_draft_leaves: usize,
    pub incomplete_draft_leaves: usize,
    /// Leaves that are terminal-valid.
    pub valid_leaves: usize,
    /// Leaves that are not terminal-valid.
    pub incomplete_leaves: usize,
}

impl GenerationStats {
    /// Records one node expansion.
    pub fn record_visit(&mut self) {
        self.nodes_visited += 1;
    }

    /// Records a node pruned on an unreachable required check.
    pub fn record_unreachable_prune(&mut self) {
        self.pruned_unreachable += 1;
    }

    /// Records candidates dropped below the minimum score.
    pub fn record_low_score_drops(&mut self, count: usize) {
        self.pruned_low_candidate_score += count;
    }

    /// Records a fallback node and how many of its children were kept.
    pub fn record_fallback(&mut self, kept: usize) {
        self.fallback_nodes += 1;
        self.fallback_candidates_used += kept;
    }

    /// Fills the kept-tree counters from the root's branch potential.
    pub(crate) fn finish(&mut self, root: &BranchPotential) {
        self.nodes_kept = root.node_count;
        self.complete_draft_leaves = root.complete_leaf_count;
        self.incomplete_draft_leaves = root.leaf_count - root.complete_leaf_count;
        self.valid_leaves = root.valid_leaf_count;
        self.incomplete_leaves = root.leaf_count - root.valid_leaf_count;
    }

    /// Total leaves in the returned tree.
    pub fn leaf_count(&self) -> usize {
        self.valid_leaves + self.incomplete_leaves
    }
}

impl AddAssign for GenerationStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes_visited += other.nodes_visited;
        self.nodes_kept += other.nodes_kept;
        self.pruned_unreachable += other.pruned_unreachable;
        self.pruned_low_candidate_score += other.pruned_low_candidate_score;
        self.fallback_nodes += other.fallback_nodes;
        self.fallback_candidates_used += other.fallback_candidates_used;
        self.complete_draft_leaves += other.complete_draft_leaves;
        self.incomplete_draft_leaves += other.incomplete_draft_leaves;
        self.valid_leaves += other.valid_leaves;
        self.incomplete_leaves += other.incomplete_leaves;
    }
}
