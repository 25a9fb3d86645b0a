//! Possibility tree nodes.
//!
//! Each node exclusively owns its children; there are no back-references
//! since picks never loop back to ancestors.

use std::collections::BTreeMap;

use draftforge_core::{Slot, TeamState};
use draftforge_scoring::{CheckId, CheckResult, MissingNeeds};
use serde::Serialize;

use crate::stats::GenerationStats;

/// The pick that produced a child node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    pub added_role: Slot,
    pub added_champion: String,
    pub candidate_score: u32,
    /// False when the child was re-admitted by the adaptive fallback.
    pub passes_min_score: bool,
    pub rationale: Vec<String>,
}

/// Terminal-validity and reachability facts about a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viability {
    /// Every slot is filled.
    pub is_complete_draft: bool,
    /// Complete draft with every required check satisfied.
    pub is_terminal_valid: bool,
    pub unsatisfied_required: Vec<CheckId>,
    /// Required checks no legal continuation can satisfy.
    pub unreachable_required: Vec<CheckId>,
    pub remaining_depth: usize,
    pub open_slots: usize,
}

/// Statistics of the kept subtree rooted at a node, the node included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPotential {
    pub node_count: usize,
    pub leaf_count: usize,
    pub valid_leaf_count: usize,
    pub complete_leaf_count: usize,
    pub best_leaf_score: u32,
}

impl BranchPotential {
    pub(crate) fn leaf(score: u32, viability: &Viability) -> Self {
        Self {
            node_count: 1,
            leaf_count: 1,
            valid_leaf_count: usize::from(viability.is_terminal_valid),
            complete_leaf_count: usize::from(viability.is_complete_draft),
            best_leaf_score: score,
        }
    }

    pub(crate) fn from_children(children: &[TreeNode]) -> Self {
        let mut potential = Self {
            node_count: 1,
            ..Self::default()
        };
        for child in children {
            let bp = &child.branch_potential;
            potential.node_count += bp.node_count;
            potential.leaf_count += bp.leaf_count;
            potential.valid_leaf_count += bp.valid_leaf_count;
            potential.complete_leaf_count += bp.complete_leaf_count;
            potential.best_leaf_score = potential.best_leaf_score.max(bp.best_leaf_score);
        }
        potential
    }
}

/// One node of the possibility tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub depth: usize,
    pub team_slots: TeamState,
    pub score: u32,
    pub checks: BTreeMap<CheckId, CheckResult>,
    pub missing_needs: MissingNeeds,
    /// One line per pick from the root to this node.
    pub path_rationale: Vec<String>,
    /// Absent only at the root.
    #[serde(flatten)]
    pub pick: Option<Pick>,
    pub children: Vec<TreeNode>,
    pub viability: Viability,
    pub branch_potential: BranchPotential,
    /// Present only at the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_stats: Option<GenerationStats>,
}

/// A root-level recommendation summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub slot: Slot,
    pub champion: String,
    pub candidate_score: u32,
    pub passes_min_score: bool,
    pub valid_leaf_count: usize,
}

impl TreeNode {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.pick.is_none()
    }

    pub fn added_champion(&self) -> Option<&str> {
        self.pick.as_ref().map(|p| p.added_champion.as_str())
    }

    pub fn added_role(&self) -> Option<Slot> {
        self.pick.as_ref().map(|p| p.added_role)
    }

    /// Depth-first pre-order walk over this node and its descendants.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter { stack: vec![self] }
    }

    /// Leaves in pre-order.
    pub fn leaves(&self) -> impl Iterator<Item = &TreeNode> {
        self.iter().filter(|n| n.is_leaf())
    }

    /// The best leaf: terminal-valid leaves first, then highest score.
    ///
    /// Ties keep the first leaf in pre-order.
    pub fn best_leaf(&self) -> &TreeNode {
        let mut best = self;
        let mut best_key = None;
        for leaf in self.leaves() {
            let key = (leaf.viability.is_terminal_valid, leaf.score);
            if best_key.map_or(true, |k| key > k) {
                best = leaf;
                best_key = Some(key);
            }
        }
        best
    }

    /// The immediate picks offered at this node, in ranked order.
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.children
            .iter()
            .filter_map(|child| {
                child.pick.as_ref().map(|pick| Recommendation {
                    slot: pick.added_role,
                    champion: pick.added_champion.clone(),
                    candidate_score: pick.candidate_score,
                    passes_min_score: pick.passes_min_score,
                    valid_leaf_count: child.branch_potential.valid_leaf_count,
                })
            })
            .collect()
    }
}

/// Pre-order iterator returned by [`TreeNode::iter`].
pub struct NodeIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
