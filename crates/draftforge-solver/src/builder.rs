//! Possibility tree builder.
//!
//! Expands a partial team depth-first, one open role per level. Each
//! level scores the legal candidates for the next role, filters them by
//! the configured minimum, ranks them and recurses into the top
//! `max_branch`. Nodes whose required checks can no longer be met are
//! pruned.

use std::collections::BTreeSet;
use std::time::Instant;

use draftforge_config::{DraftConfig, RankGoal, SearchConfig};
use draftforge_core::{
    Catalog, DraftError, RequirementToggles, Result, RolePoolProvider, Slot, TagWeights, TeamState,
};
use draftforge_scoring::{evaluate_checks, score_candidate, CandidateScore, CheckEvaluation, CheckId};
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::legality::{next_open_role, resolve_role_order, Legality};
use crate::node::{BranchPotential, Pick, TreeNode, Viability};
use crate::ranking::{by_candidate_score, by_valid_end_states, Ranked};
use crate::reachability::unreachable_required;
use crate::stats::GenerationStats;

const SATISFIED_POINTS: u32 = 10;
const UNSATISFIED_POINTS: u32 = 3;
const TOP_THREAT_BONUS: u32 = 5;
const DAMAGE_MIX_BONUS: u32 = 5;
const FILLED_SLOT_POINTS: u32 = 4;
const DISTINCT_TAG_POINTS: u32 = 2;

/// Scores a node's team from its check evaluation.
///
/// Every required check contributes, satisfied or not. A required Top
/// threat that is in place and a required damage mix that is met each add
/// a bonus. Filled slots and distinct tags add the rest.
pub fn node_score(evaluation: &CheckEvaluation) -> u32 {
    let mut score: u32 = evaluation
        .required_checks()
        .map(|c| {
            if c.satisfied {
                SATISFIED_POINTS
            } else {
                UNSATISFIED_POINTS
            }
        })
        .sum();

    if let Some(top) = evaluation.check(CheckId::TopMustBeThreat) {
        if top.required && top.is_applicable() && top.satisfied {
            score += TOP_THREAT_BONUS;
        }
    }
    if let Some(mix) = evaluation.check(CheckId::DamageMix) {
        if mix.required && mix.satisfied {
            score += DAMAGE_MIX_BONUS;
        }
    }

    let filled = evaluation.helpers.filled.len() as u32;
    let distinct = evaluation.helpers.distinct_tags() as u32;
    score + FILLED_SLOT_POINTS * filled + DISTINCT_TAG_POINTS * distinct
}

/// Builds possibility trees for one catalog and pool provider.
///
/// # Example
///
/// ```
/// use draftforge_config::SearchConfig;
/// use draftforge_core::{Catalog, Champion, DamageType, RolePools, Scaling, Slot, Tag, TeamState};
/// use draftforge_solver::PossibilityTreeBuilder;
///
/// let catalog = Catalog::from_champions([
///     Champion::new("Camille", [Slot::Top], DamageType::Ad, Scaling::Mid)
///         .with_tags([Tag::SideLaneThreat]),
///     Champion::new("Ornn", [Slot::Top], DamageType::Ap, Scaling::Late)
///         .with_tags([Tag::Frontline]),
/// ]);
/// let pools = RolePools::new().with_pool("blue", Slot::Top, ["Camille", "Ornn"]);
///
/// let tree = PossibilityTreeBuilder::new(&catalog, &pools)
///     .with_search(SearchConfig::new().with_max_depth(1).with_pruning(false))
///     .build("blue", &TeamState::new())
///     .unwrap();
///
/// // Ornn is not a threat, so only Camille may take Top.
/// assert_eq!(tree.children.len(), 1);
/// assert_eq!(tree.children[0].added_champion(), Some("Camille"));
/// ```
pub struct PossibilityTreeBuilder<'a, P: RolePoolProvider + ?Sized> {
    catalog: &'a Catalog,
    pools: &'a P,
    toggles: RequirementToggles,
    weights: TagWeights,
    search: SearchConfig,
    excluded: BTreeSet<String>,
    role_order: Vec<Slot>,
}

impl<'a, P: RolePoolProvider + ?Sized> PossibilityTreeBuilder<'a, P> {
    pub fn new(catalog: &'a Catalog, pools: &'a P) -> Self {
        Self {
            catalog,
            pools,
            toggles: RequirementToggles::default(),
            weights: TagWeights::default(),
            search: SearchConfig::default(),
            excluded: BTreeSet::new(),
            role_order: Vec::new(),
        }
    }

    /// Applies every setting of a loaded configuration.
    pub fn with_config(self, config: &DraftConfig) -> Self {
        self.with_toggles(config.requirements)
            .with_weights(config.weights.clone())
            .with_search(config.search.clone())
            .with_role_order(config.role_order.iter().copied())
            .with_excluded(config.excluded.iter().cloned())
    }

    pub fn with_toggles(mut self, toggles: RequirementToggles) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn with_weights(mut self, weights: TagWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Adds champions that are never recommended.
    pub fn with_excluded<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.excluded.extend(names.into_iter().map(Into::into));
        self
    }

    /// Preferred pick order. Unmentioned slots follow in canonical order.
    pub fn with_role_order(mut self, order: impl IntoIterator<Item = Slot>) -> Self {
        self.role_order = order.into_iter().collect();
        self
    }

    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    /// Builds the possibility tree rooted at `team` for `team_id`.
    ///
    /// # Errors
    ///
    /// - [`DraftError::InvalidSearch`] for out-of-range search parameters,
    ///   before any expansion.
    /// - [`DraftError::UnknownTeam`] if the provider has no pools for `team_id`.
    /// - [`DraftError::UnknownChampion`] if the team or a pool names a
    ///   champion missing from the catalog.
    ///
    /// Running out of candidates is never an error; the node becomes a leaf.
    pub fn build(&self, team_id: &str, team: &TeamState) -> Result<TreeNode> {
        self.search.validate()?;
        if !self.pools.has_team(team_id) {
            return Err(DraftError::UnknownTeam(team_id.to_string()));
        }

        let order = resolve_role_order(&self.role_order);
        let expansion = Expansion {
            legality: Legality {
                catalog: self.catalog,
                pools: self.pools,
                team_id,
                toggles: &self.toggles,
                excluded: &self.excluded,
            },
            weights: &self.weights,
            search: &self.search,
            order: &order,
        };

        let started = Instant::now();
        info!(
            event = "tree_build_start",
            team_id,
            filled = team.filled_count(),
            max_depth = self.search.max_depth,
            max_branch = self.search.max_branch,
            rank_goal = %self.search.rank_goal,
            parallel = self.search.parallel,
        );

        let (mut root, mut stats) = expansion.expand(team.clone(), 0, Vec::new())?;
        stats.finish(&root.branch_potential);

        info!(
            event = "tree_build_end",
            team_id,
            duration_ms = started.elapsed().as_millis() as u64,
            nodes_visited = stats.nodes_visited,
            nodes_kept = stats.nodes_kept,
            valid_leaves = stats.valid_leaves,
            pruned_unreachable = stats.pruned_unreachable,
            fallback_nodes = stats.fallback_nodes,
        );

        root.generation_stats = Some(stats);
        Ok(root)
    }
}

/// Per-build state shared by every recursive step.
struct Expansion<'a, P: RolePoolProvider + ?Sized> {
    legality: Legality<'a, P>,
    weights: &'a TagWeights,
    search: &'a SearchConfig,
    order: &'a [Slot],
}

impl<'a, P: RolePoolProvider + ?Sized> Expansion<'a, P> {
    fn expand(
        &self,
        team: TeamState,
        depth: usize,
        path_rationale: Vec<String>,
    ) -> Result<(TreeNode, GenerationStats)> {
        let evaluation = evaluate_checks(&team, self.legality.catalog, self.legality.toggles)?;
        let score = node_score(&evaluation);
        let is_complete = team.is_complete();
        let unsatisfied = evaluation.unsatisfied_required();

        let mut viability = Viability {
            is_complete_draft: is_complete,
            is_terminal_valid: is_complete && unsatisfied.is_empty(),
            unsatisfied_required: unsatisfied,
            unreachable_required: Vec::new(),
            remaining_depth: self.search.max_depth.saturating_sub(depth),
            open_slots: team.open_count(),
        };

        let mut stats = GenerationStats::default();
        stats.record_visit();

        let children = if depth >= self.search.max_depth || is_complete {
            Vec::new()
        } else {
            self.expand_children(&team, depth, &path_rationale, &evaluation, &mut viability, &mut stats)?
        };

        let branch_potential = if children.is_empty() {
            BranchPotential::leaf(score, &viability)
        } else {
            BranchPotential::from_children(&children)
        };

        let node = TreeNode {
            depth,
            team_slots: team,
            score,
            checks: evaluation.checks,
            missing_needs: evaluation.missing_needs,
            path_rationale,
            pick: None,
            children,
            viability,
            branch_potential,
            generation_stats: None,
        };
        Ok((node, stats))
    }

    fn expand_children(
        &self,
        team: &TeamState,
        depth: usize,
        path: &[String],
        evaluation: &CheckEvaluation,
        viability: &mut Viability,
        stats: &mut GenerationStats,
    ) -> Result<Vec<TreeNode>> {
        let open_pools = self.legality.open_pools(team)?;
        viability.unreachable_required = unreachable_required(evaluation, &open_pools);
        if !viability.unreachable_required.is_empty() && self.search.prune_unreachable_required {
            stats.record_unreachable_prune();
            debug!(
                event = "prune_unreachable",
                depth,
                unreachable = ?viability.unreachable_required,
            );
            return Ok(Vec::new());
        }

        let Some(role) = next_open_role(self.order, team) else {
            return Ok(Vec::new());
        };
        let legal = open_pools
            .into_iter()
            .find(|(slot, _)| *slot == role)
            .map(|(_, pool)| pool)
            .unwrap_or_default();
        if legal.is_empty() {
            debug!(event = "no_legal_candidates", depth, role = %role);
            return Ok(Vec::new());
        }

        let mut ranked: Vec<Ranked<'a>> = legal
            .into_iter()
            .map(|champion| {
                let scored = score_candidate(champion, evaluation, self.weights);
                trace!(
                    event = "candidate",
                    depth,
                    role = %role,
                    champion = %champion.name,
                    score = scored.score,
                );
                Ranked {
                    champion,
                    scored,
                    passes_min_score: true,
                }
            })
            .collect();

        let min_score = self.search.min_candidate_score;
        let total = ranked.len();
        let passing = ranked.iter().filter(|r| r.scored.score >= min_score).count();
        let fallback = passing == 0;
        if fallback {
            for r in &mut ranked {
                r.passes_min_score = false;
            }
        } else {
            ranked.retain(|r| r.scored.score >= min_score);
            stats.record_low_score_drops(total - passing);
        }

        let children = match self.search.rank_goal {
            RankGoal::CandidateScore => {
                ranked.sort_by(by_candidate_score);
                ranked.truncate(self.search.max_branch);
                // Children keep candidate order.
                self.build_children(team, role, depth, path, &ranked, stats)?
            }
            RankGoal::ValidEndStates => {
                ranked.sort_by(by_candidate_score);
                let mut children = self.build_children(team, role, depth, path, &ranked, stats)?;
                children.sort_by(by_valid_end_states);
                children.truncate(self.search.max_branch);
                children
            }
        };

        if fallback {
            stats.record_fallback(children.len());
            debug!(
                event = "fallback",
                depth,
                role = %role,
                min_score,
                readmitted = children.len(),
            );
        }
        Ok(children)
    }

    fn build_children(
        &self,
        team: &TeamState,
        role: Slot,
        depth: usize,
        path: &[String],
        ranked: &[Ranked<'a>],
        stats: &mut GenerationStats,
    ) -> Result<Vec<TreeNode>> {
        let built: Vec<(TreeNode, GenerationStats)> = if self.search.parallel {
            ranked
                .par_iter()
                .map(|candidate| self.child(team, role, depth, path, candidate))
                .collect::<Result<_>>()?
        } else {
            ranked
                .iter()
                .map(|candidate| self.child(team, role, depth, path, candidate))
                .collect::<Result<_>>()?
        };

        let mut children = Vec::with_capacity(built.len());
        for (child, child_stats) in built {
            *stats += child_stats;
            children.push(child);
        }
        Ok(children)
    }

    fn child(
        &self,
        team: &TeamState,
        role: Slot,
        depth: usize,
        path: &[String],
        candidate: &Ranked<'a>,
    ) -> Result<(TreeNode, GenerationStats)> {
        let name = &candidate.champion.name;
        let mut path_rationale = path.to_vec();
        path_rationale.push(path_line(role, name, &candidate.scored));

        let (mut node, stats) = self.expand(team.clone().with(role, name), depth + 1, path_rationale)?;
        node.pick = Some(Pick {
            added_role: role,
            added_champion: name.clone(),
            candidate_score: candidate.scored.score,
            passes_min_score: candidate.passes_min_score,
            rationale: candidate.scored.rationale.clone(),
        });
        Ok((node, stats))
    }
}

/// `"<Slot>: <Champion> (+N)"`, then the rationale lines after `" - "`.
fn path_line(role: Slot, name: &str, scored: &CandidateScore) -> String {
    let head = format!("{}: {} (+{})", role, name, scored.score);
    if scored.rationale.is_empty() {
        head
    } else {
        format!("{} - {}", head, scored.rationale.join("; "))
    }
}
