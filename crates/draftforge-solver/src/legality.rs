//! Role order and legal candidate resolution.

use std::collections::BTreeSet;

use draftforge_core::{Catalog, Champion, RequirementToggles, Result, RolePoolProvider, Slot, TeamState};

/// Resolves the effective role order.
///
/// Caller-preferred slots come first with duplicates dropped; slots the
/// caller did not mention follow in canonical order.
pub fn resolve_role_order(preferred: &[Slot]) -> Vec<Slot> {
    let mut order = Vec::with_capacity(Slot::COUNT);
    for &slot in preferred.iter().chain(Slot::ALL.iter()) {
        if !order.contains(&slot) {
            order.push(slot);
        }
    }
    order
}

/// First slot in `order` that `team` has not filled.
pub fn next_open_role(order: &[Slot], team: &TeamState) -> Option<Slot> {
    order.iter().copied().find(|&slot| !team.is_filled(slot))
}

/// Inputs that decide which champions may fill a slot.
pub(crate) struct Legality<'a, P: RolePoolProvider + ?Sized> {
    pub catalog: &'a Catalog,
    pub pools: &'a P,
    pub team_id: &'a str,
    pub toggles: &'a RequirementToggles,
    pub excluded: &'a BTreeSet<String>,
}

impl<'a, P: RolePoolProvider + ?Sized> Legality<'a, P> {
    /// Legal candidates for `slot`, in pool order.
    ///
    /// A candidate is in the team's pool for the slot, not excluded and
    /// not already picked. With the Top threat check required, Top
    /// candidates must also be threats. Duplicate pool entries collapse
    /// to the first occurrence. A pool name the catalog does not know is
    /// an error.
    pub fn candidates(&self, team: &TeamState, slot: Slot) -> Result<Vec<&'a Champion>> {
        let pool = self.pools.role_pool(self.team_id, slot)?;
        let threat_only = slot == Slot::Top && self.toggles.top_must_be_threat;

        let mut seen = BTreeSet::new();
        let mut legal = Vec::with_capacity(pool.len());
        for name in pool {
            if self.excluded.contains(name) || team.contains_champion(name) {
                continue;
            }
            let champion = self.catalog.lookup(name)?;
            if threat_only && !champion.is_top_threat() {
                continue;
            }
            if seen.insert(name.as_str()) {
                legal.push(champion);
            }
        }
        Ok(legal)
    }

    /// Legal candidates for every open slot, in canonical slot order.
    pub fn open_pools(&self, team: &TeamState) -> Result<Vec<(Slot, Vec<&'a Champion>)>> {
        team.empty_slots()
            .map(|slot| Ok((slot, self.candidates(team, slot)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use draftforge_core::RolePools;
    use draftforge_test::{sample_catalog, sample_pools, TEAM};

    use super::*;

    #[test]
    fn test_role_order_dedups_and_appends() {
        let order = resolve_role_order(&[Slot::Support, Slot::Mid, Slot::Support]);
        assert_eq!(
            order,
            vec![Slot::Support, Slot::Mid, Slot::Top, Slot::Jungle, Slot::Adc]
        );
        assert_eq!(resolve_role_order(&[]), Slot::ALL.to_vec());
    }

    #[test]
    fn test_next_open_role() {
        let order = resolve_role_order(&[Slot::Adc]);
        let team = TeamState::new().with(Slot::Adc, "Ashe");
        assert_eq!(next_open_role(&order, &team), Some(Slot::Top));
        assert_eq!(next_open_role(&order, &TeamState::new()), Some(Slot::Adc));
    }

    #[test]
    fn test_candidates_filter_threats_and_exclusions() {
        let catalog = sample_catalog();
        let pools = sample_pools();
        let toggles = RequirementToggles::default();
        let excluded: BTreeSet<String> = ["Aatrox".to_string()].into();
        let legality = Legality {
            catalog: &catalog,
            pools: &pools,
            team_id: TEAM,
            toggles: &toggles,
            excluded: &excluded,
        };

        let names: Vec<&str> = legality
            .candidates(&TeamState::new(), Slot::Top)
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Camille", "Fiora"]);
    }

    #[test]
    fn test_candidates_skip_picked_and_duplicates() {
        let catalog = sample_catalog();
        let pools = RolePools::new().with_pool(TEAM, Slot::Mid, ["Azir", "Galio", "Azir", "Syndra"]);
        let toggles = RequirementToggles::default();
        let excluded = BTreeSet::new();
        let legality = Legality {
            catalog: &catalog,
            pools: &pools,
            team_id: TEAM,
            toggles: &toggles,
            excluded: &excluded,
        };

        let team = TeamState::new().with(Slot::Support, "Galio");
        let names: Vec<&str> = legality
            .candidates(&team, Slot::Mid)
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Azir", "Syndra"]);
    }

    #[test]
    fn test_unknown_pool_entry_is_error() {
        let catalog = sample_catalog();
        let pools = RolePools::new().with_pool(TEAM, Slot::Mid, ["Zed"]);
        let toggles = RequirementToggles::default();
        let excluded = BTreeSet::new();
        let legality = Legality {
            catalog: &catalog,
            pools: &pools,
            team_id: TEAM,
            toggles: &toggles,
            excluded: &excluded,
        };

        assert!(legality.candidates(&TeamState::new(), Slot::Mid).is_err());
    }
}
