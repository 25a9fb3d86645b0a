//! Champion records and the catalog that owns them.

use std::collections::{BTreeMap, BTreeSet};

use super::tag::{Tag, TagSet};
use super::vocabulary::{DamageType, Scaling, Slot};
use crate::error::{DraftError, Result};

/// An immutable champion record.
///
/// Champions are owned by the [`Catalog`] and referenced by name
/// everywhere else.
///
/// # Example
///
/// ```
/// use draftforge_core::{Champion, DamageType, Scaling, Slot, Tag};
///
/// let ornn = Champion::new("Ornn", [Slot::Top], DamageType::Ap, Scaling::Late)
///     .with_tags([Tag::Frontline, Tag::HardEngage]);
/// assert!(ornn.has_tag(Tag::Frontline));
/// assert!(ornn.plays(Slot::Top));
/// assert!(!ornn.is_top_threat());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Champion {
    pub name: String,
    pub roles: BTreeSet<Slot>,
    pub damage_type: DamageType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scaling: Scaling,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: TagSet,
}

impl Champion {
    /// Creates a champion with no tags.
    pub fn new(
        name: impl Into<String>,
        roles: impl IntoIterator<Item = Slot>,
        damage_type: DamageType,
        scaling: Scaling,
    ) -> Self {
        Self {
            name: name.into(),
            roles: roles.into_iter().collect(),
            damage_type,
            scaling,
            tags: TagSet::new(),
        }
    }

    /// Adds the given tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        for tag in tags {
            self.tags.insert(tag);
        }
        self
    }

    #[inline]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(tag)
    }

    #[inline]
    pub fn plays(&self, slot: Slot) -> bool {
        self.roles.contains(&slot)
    }

    /// Returns true if the champion carries SideLaneThreat or DiveThreat.
    #[inline]
    pub fn is_top_threat(&self) -> bool {
        self.tags.has_top_threat()
    }
}

/// Champion lookup keyed by unique name.
///
/// Lookups that miss are referential failures: the catalog must cover
/// every name placed in a team state or role pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    champions: BTreeMap<String, Champion>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog; a later champion with a duplicate name replaces the earlier one.
    pub fn from_champions(champions: impl IntoIterator<Item = Champion>) -> Self {
        let champions = champions
            .into_iter()
            .map(|c| (c.name.clone(), c))
            .collect();
        Self { champions }
    }

    /// Inserts a champion, returning the previous record of that name.
    pub fn insert(&mut self, champion: Champion) -> Option<Champion> {
        self.champions.insert(champion.name.clone(), champion)
    }

    pub fn get(&self, name: &str) -> Option<&Champion> {
        self.champions.get(name)
    }

    /// Looks up a champion, failing with [`DraftError::UnknownChampion`].
    pub fn lookup(&self, name: &str) -> Result<&Champion> {
        self.champions
            .get(name)
            .ok_or_else(|| DraftError::UnknownChampion(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.champions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    /// Iterates champions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Champion> {
        self.champions.values()
    }
}

impl FromIterator<Champion> for Catalog {
    fn from_iter<I: IntoIterator<Item = Champion>>(iter: I) -> Self {
        Self::from_champions(iter)
    }
}
