//! Reachability of unsatisfied required checks.
//!
//! A check is reachable when some legal champion for some open slot could
//! still satisfy it. The analysis looks at single picks only, so it never
//! prunes a node that has a satisfying continuation.

use draftforge_core::{Champion, Slot};
use draftforge_scoring::{CheckEvaluation, CheckId};

/// Returns the unsatisfied required checks no legal pick can satisfy.
///
/// `open_pools` lists the legal candidates of every open slot. Results
/// follow check order.
pub fn unreachable_required(
    evaluation: &CheckEvaluation,
    open_pools: &[(Slot, Vec<&Champion>)],
) -> Vec<CheckId> {
    let helpers = &evaluation.helpers;

    evaluation
        .unsatisfied_required()
        .into_iter()
        .filter(|&id| match id {
            CheckId::DamageMix => {
                let ad = helpers.has_ad || any_candidate(open_pools, |c| c.damage_type.covers_ad());
                let ap = helpers.has_ap || any_candidate(open_pools, |c| c.damage_type.covers_ap());
                !(ad && ap)
            }
            CheckId::TopMustBeThreat => !open_pools
                .iter()
                .any(|(slot, pool)| *slot == Slot::Top && pool.iter().any(|c| c.is_top_threat())),
            other => other
                .tag()
                .is_some_and(|tag| !any_candidate(open_pools, |c| c.has_tag(tag))),
        })
        .collect()
}

fn any_candidate(open_pools: &[(Slot, Vec<&Champion>)], pred: impl Fn(&Champion) -> bool) -> bool {
    open_pools
        .iter()
        .any(|(_, pool)| pool.iter().any(|&c| pred(c)))
}
