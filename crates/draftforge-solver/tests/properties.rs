//! Property tests for the possibility tree builder over random partial
//! teams, toggles, exclusions and search bounds.

use draftforge_config::{RankGoal, SearchConfig};
use draftforge_core::{Catalog, RequirementToggles, RolePoolProvider, RolePools, Slot, TeamState};
use draftforge_solver::{PossibilityTreeBuilder, TreeNode};
use draftforge_test::{sample_catalog, sample_pools, TEAM};
use proptest::prelude::*;

fn team_strategy() -> impl Strategy<Value = TeamState> {
    let catalog = sample_catalog();
    let per_slot: Vec<_> = Slot::ALL
        .iter()
        .map(|&slot| {
            let names: Vec<String> = catalog
                .iter()
                .filter(|c| c.plays(slot))
                .map(|c| c.name.clone())
                .collect();
            proptest::option::of(proptest::sample::select(names))
        })
        .collect();

    per_slot.prop_map(|picks| {
        let mut team = TeamState::new();
        for (&slot, name) in Slot::ALL.iter().zip(picks) {
            if let Some(name) = name {
                if !team.contains_champion(&name) {
                    team.set(slot, Some(name.as_str()));
                }
            }
        }
        team
    })
}

fn toggles_strategy() -> impl Strategy<Value = RequirementToggles> {
    any::<[bool; 8]>().prop_map(|b| RequirementToggles {
        require_hard_engage: b[0],
        require_frontline: b[1],
        require_waveclear: b[2],
        require_damage_mix: b[3],
        require_anti_tank: b[4],
        require_disengage: b[5],
        require_primary_carry: b[6],
        top_must_be_threat: b[7],
    })
}

fn search_strategy() -> impl Strategy<Value = SearchConfig> {
    (0usize..=3, 1usize..=4, 0u32..=8, any::<bool>(), any::<bool>()).prop_map(
        |(depth, branch, min_score, by_end_states, prune)| {
            let goal = if by_end_states {
                RankGoal::ValidEndStates
            } else {
                RankGoal::CandidateScore
            };
            SearchConfig::new()
                .with_max_depth(depth)
                .with_max_branch(branch)
                .with_min_candidate_score(min_score)
                .with_rank_goal(goal)
                .with_pruning(prune)
        },
    )
}

fn excluded_strategy() -> impl Strategy<Value = Vec<String>> {
    let names: Vec<String> = sample_catalog().iter().map(|c| c.name.clone()).collect();
    proptest::sample::subsequence(names, 0..=4)
}

fn role_order_strategy() -> impl Strategy<Value = Vec<Slot>> {
    proptest::sample::subsequence(Slot::ALL.to_vec(), 0..=5).prop_shuffle()
}

struct Fixture {
    catalog: Catalog,
    pools: RolePools,
}

impl Fixture {
    fn new() -> Self {
        Self {
            catalog: sample_catalog(),
            pools: sample_pools(),
        }
    }

    fn build(
        &self,
        team: &TeamState,
        toggles: RequirementToggles,
        search: &SearchConfig,
        excluded: &[String],
        order: &[Slot],
    ) -> TreeNode {
        PossibilityTreeBuilder::new(&self.catalog, &self.pools)
            .with_toggles(toggles)
            .with_search(search.clone())
            .with_excluded(excluded.iter().cloned())
            .with_role_order(order.iter().copied())
            .build(TEAM, team)
            .unwrap()
    }
}

/// Walks parent/child pairs and checks every pick is legal.
fn check_picks(
    fixture: &Fixture,
    node: &TreeNode,
    toggles: &RequirementToggles,
    excluded: &[String],
) -> Result<(), TestCaseError> {
    for child in &node.children {
        let pick = child.pick.as_ref().unwrap();
        let role = pick.added_role;
        let name = pick.added_champion.as_str();

        prop_assert!(node.team_slots.get(role).is_none());
        prop_assert!(!node.team_slots.contains_champion(name));
        prop_assert!(!excluded.iter().any(|e| e == name));
        let pool = fixture.pools.role_pool(TEAM, role).unwrap();
        prop_assert!(pool.iter().any(|p| p == name));
        if role == Slot::Top && toggles.top_must_be_threat {
            prop_assert!(fixture.catalog.get(name).unwrap().is_top_threat());
        }
        prop_assert_eq!(child.depth, node.depth + 1);
        prop_assert_eq!(child.team_slots.filled_count(), node.team_slots.filled_count() + 1);

        check_picks(fixture, child, toggles, excluded)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_build_is_deterministic(
        team in team_strategy(),
        toggles in toggles_strategy(),
        search in search_strategy(),
        excluded in excluded_strategy(),
        order in role_order_strategy(),
    ) {
        let fixture = Fixture::new();
        let first = fixture.build(&team, toggles, &search, &excluded, &order);
        let second = fixture.build(&team, toggles, &search, &excluded, &order);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_picks_are_legal(
        team in team_strategy(),
        toggles in toggles_strategy(),
        search in search_strategy(),
        excluded in excluded_strategy(),
        order in role_order_strategy(),
    ) {
        let fixture = Fixture::new();
        let tree = fixture.build(&team, toggles, &search, &excluded, &order);
        check_picks(&fixture, &tree, &toggles, &excluded)?;
    }

    #[test]
    fn prop_depth_and_branch_bounds(
        team in team_strategy(),
        toggles in toggles_strategy(),
        search in search_strategy(),
        order in role_order_strategy(),
    ) {
        let fixture = Fixture::new();
        let tree = fixture.build(&team, toggles, &search, &[], &order);
        for node in tree.iter() {
            prop_assert!(node.children.len() <= search.max_branch);
            prop_assert!(node.depth <= search.max_depth);
        }
    }

    #[test]
    fn prop_terminal_validity(
        team in team_strategy(),
        toggles in toggles_strategy(),
        search in search_strategy(),
    ) {
        let fixture = Fixture::new();
        let tree = fixture.build(&team, toggles, &search, &[], &[]);
        for node in tree.iter() {
            if node.viability.is_terminal_valid {
                prop_assert!(node.team_slots.is_complete());
                prop_assert!(node.checks.values().filter(|c| c.required).all(|c| c.satisfied));
            }
            if node.is_leaf() && node.team_slots.open_count() > 0 {
                prop_assert!(!node.viability.is_terminal_valid);
            }
        }
    }

    #[test]
    fn prop_unreachable_nodes_have_no_valid_descendants(
        team in team_strategy(),
        toggles in toggles_strategy(),
        search in search_strategy(),
    ) {
        let fixture = Fixture::new();

        let pruned = fixture.build(&team, toggles, &search.clone().with_pruning(true), &[], &[]);
        for node in pruned.iter() {
            if !node.viability.unreachable_required.is_empty() {
                prop_assert!(node.children.is_empty());
            }
        }

        let unpruned = fixture.build(&team, toggles, &search.with_pruning(false), &[], &[]);
        for node in unpruned.iter() {
            if !node.viability.unreachable_required.is_empty() {
                prop_assert_eq!(node.branch_potential.valid_leaf_count, 0);
            }
        }
    }

    #[test]
    fn prop_stats_describe_returned_tree(
        team in team_strategy(),
        toggles in toggles_strategy(),
        search in search_strategy(),
    ) {
        let fixture = Fixture::new();
        let tree = fixture.build(&team, toggles, &search, &[], &[]);
        let stats = tree.generation_stats.clone().unwrap();

        prop_assert_eq!(stats.nodes_kept, tree.iter().count());
        prop_assert!(stats.nodes_visited >= stats.nodes_kept);
        prop_assert_eq!(
            stats.valid_leaves,
            tree.leaves().filter(|n| n.viability.is_terminal_valid).count()
        );
        prop_assert_eq!(
            stats.complete_draft_leaves,
            tree.leaves().filter(|n| n.viability.is_complete_draft).count()
        );
        prop_assert_eq!(stats.leaf_count(), tree.leaves().count());
    }
}
