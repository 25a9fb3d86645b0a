//! Role pools derived from a catalog.

use draftforge_core::{Catalog, RolePools, Slot};

use crate::champions::sample_catalog;

/// Team identifier registered by [`sample_pools`].
pub const TEAM: &str = "blue";

/// Builds pools for `team_id` listing every catalog champion under each slot it plays.
///
/// Pool order follows catalog (name) order.
pub fn pools_from_catalog(team_id: &str, catalog: &Catalog) -> RolePools {
    let mut pools = RolePools::new();
    pools.register_team(team_id);
    for slot in Slot::ALL {
        let names: Vec<String> = catalog
            .iter()
            .filter(|c| c.plays(slot))
            .map(|c| c.name.clone())
            .collect();
        pools.set_pool(team_id, slot, names);
    }
    pools
}

/// Pools for [`TEAM`] over the sample catalog.
pub fn sample_pools() -> RolePools {
    pools_from_catalog(TEAM, &sample_catalog())
}
