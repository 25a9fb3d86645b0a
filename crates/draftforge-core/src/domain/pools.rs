//! Role pools: the champions each team may field in each slot.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::vocabulary::Slot;
use crate::error::{DraftError, Result};

/// Supplies, per team and slot, the ordered list of legal champion names.
///
/// Implementations are read-only for the engine. An unregistered team is
/// a referential failure; a registered team with no entries for a slot
/// yields an empty pool.
pub trait RolePoolProvider: Send + Sync {
    /// Returns the pool for `slot` on team `team_id`.
    fn role_pool(&self, team_id: &str, slot: Slot) -> Result<&[String]>;

    /// Returns true if the team has registered pools.
    fn has_team(&self, team_id: &str) -> bool;
}

/// In-memory role pools keyed by team identifier.
///
/// # Example
///
/// ```
/// use draftforge_core::{RolePoolProvider, RolePools, Slot};
///
/// let mut pools = RolePools::new();
/// pools.set_pool("blue", Slot::Top, ["Ornn", "Fiora"]);
///
/// assert_eq!(pools.role_pool("blue", Slot::Top).unwrap(), ["Ornn", "Fiora"]);
/// assert!(pools.role_pool("blue", Slot::Mid).unwrap().is_empty());
/// assert!(pools.role_pool("red", Slot::Top).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RolePools {
    teams: BTreeMap<String, BTreeMap<Slot, Vec<String>>>,
}

impl RolePools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a team with no pools yet.
    pub fn register_team(&mut self, team_id: impl Into<String>) {
        self.teams.entry(team_id.into()).or_default();
    }

    /// Replaces the pool of one slot, registering the team if needed.
    pub fn set_pool<I, N>(&mut self, team_id: impl Into<String>, slot: Slot, names: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.teams
            .entry(team_id.into())
            .or_default()
            .insert(slot, names.into_iter().map(Into::into).collect());
    }

    /// Builder form of [`RolePools::set_pool`].
    pub fn with_pool<I, N>(mut self, team_id: impl Into<String>, slot: Slot, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.set_pool(team_id, slot, names);
        self
    }

    /// Returns the registered team identifiers in order.
    pub fn team_ids(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }
}

impl RolePoolProvider for RolePools {
    fn role_pool(&self, team_id: &str, slot: Slot) -> Result<&[String]> {
        let team = self
            .teams
            .get(team_id)
            .ok_or_else(|| DraftError::UnknownTeam(team_id.to_string()))?;
        Ok(team.get(&slot).map(Vec::as_slice).unwrap_or(&[]))
    }

    fn has_team(&self, team_id: &str) -> bool {
        self.teams.contains_key(team_id)
    }
}

impl<P: RolePoolProvider> RolePoolProvider for Arc<P> {
    fn role_pool(&self, team_id: &str, slot: Slot) -> Result<&[String]> {
        self.as_ref().role_pool(team_id, slot)
    }

    fn has_team(&self, team_id: &str) -> bool {
        self.as_ref().has_team(team_id)
    }
}
