//! Team state: one optional champion name per slot.

use std::fmt;

use super::vocabulary::Slot;

/// Mapping from every [`Slot`] to a champion name or empty.
///
/// Blank and whitespace-only names collapse to empty on insertion, so a
/// team state always has exactly five normalized entries.
///
/// # Example
///
/// ```
/// use draftforge_core::{Slot, TeamState};
///
/// let team = TeamState::new()
///     .with(Slot::Mid, "Azir")
///     .with(Slot::Adc, "Ashe")
///     .with(Slot::Top, "   ");
///
/// assert_eq!(team.get(Slot::Mid), Some("Azir"));
/// assert_eq!(team.get(Slot::Top), None);
/// assert_eq!(team.filled_count(), 2);
/// assert!(!team.is_complete());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct TeamState {
    slots: [Option<String>; Slot::COUNT],
}

impl TeamState {
    /// Creates an empty team.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a team from (slot, name) pairs; later pairs win.
    pub fn from_pairs<I, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Slot, N)>,
        N: AsRef<str>,
    {
        let mut team = Self::new();
        for (slot, name) in pairs {
            team.set(slot, Some(name.as_ref()));
        }
        team
    }

    /// Returns a copy with `slot` set to `name`.
    pub fn with(mut self, slot: Slot, name: impl AsRef<str>) -> Self {
        self.set(slot, Some(name.as_ref()));
        self
    }

    /// Sets or clears a slot, normalizing blank names to empty.
    pub fn set(&mut self, slot: Slot, name: Option<&str>) {
        self.slots[slot.index()] = name
            .filter(|n| !n.trim().is_empty())
            .map(str::to_string);
    }

    pub fn clear(&mut self, slot: Slot) {
        self.slots[slot.index()] = None;
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slots[slot.index()].as_deref()
    }

    pub fn is_filled(&self, slot: Slot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Filled (slot, champion) pairs in canonical slot order.
    pub fn filled(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        Slot::ALL
            .iter()
            .filter_map(move |&slot| self.get(slot).map(|name| (slot, name)))
    }

    /// Empty slots in canonical order.
    pub fn empty_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::ALL
            .iter()
            .copied()
            .filter(move |&slot| !self.is_filled(slot))
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn open_count(&self) -> usize {
        Slot::COUNT - self.filled_count()
    }

    /// Returns true once every slot holds a champion.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns true if any slot holds the named champion.
    pub fn contains_champion(&self, name: &str) -> bool {
        self.slots.iter().flatten().any(|n| n == name)
    }
}

impl fmt::Debug for TeamState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(Slot::ALL.iter().map(|s| (s, self.get(*s))))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TeamState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(Slot::ALL.iter().map(|s| (s, self.get(*s))))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TeamState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries =
            std::collections::BTreeMap::<Slot, Option<String>>::deserialize(deserializer)?;
        let mut team = TeamState::new();
        for (slot, name) in entries {
            team.set(slot, name.as_deref());
        }
        Ok(team)
    }
}
