//! Capability tags and the fixed-size tag set.

use std::fmt;
use std::str::FromStr;

use crate::error::DraftError;

/// One of the 20 boolean capability labels a champion may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    HardEngage,
    FollowUpEngage,
    PickThreat,
    Frontline,
    Disengage,
    Waveclear,
    ZoneControl,
    ObjectiveSecure,
    AntiTank,
    #[cfg_attr(feature = "serde", serde(rename = "FrontToBackDPS"))]
    FrontToBackDps,
    DiveThreat,
    SideLaneThreat,
    Burst,
    Poke,
    Sustain,
    Siege,
    Peel,
    UtilityCarry,
    PrimaryCarry,
    Mobility,
}

impl Tag {
    pub const COUNT: usize = 20;

    /// All tags in declaration order.
    pub const ALL: [Tag; Tag::COUNT] = [
        Tag::HardEngage,
        Tag::FollowUpEngage,
        Tag::PickThreat,
        Tag::Frontline,
        Tag::Disengage,
        Tag::Waveclear,
        Tag::ZoneControl,
        Tag::ObjectiveSecure,
        Tag::AntiTank,
        Tag::FrontToBackDps,
        Tag::DiveThreat,
        Tag::SideLaneThreat,
        Tag::Burst,
        Tag::Poke,
        Tag::Sustain,
        Tag::Siege,
        Tag::Peel,
        Tag::UtilityCarry,
        Tag::PrimaryCarry,
        Tag::Mobility,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::HardEngage => "HardEngage",
            Tag::FollowUpEngage => "FollowUpEngage",
            Tag::PickThreat => "PickThreat",
            Tag::Frontline => "Frontline",
            Tag::Disengage => "Disengage",
            Tag::Waveclear => "Waveclear",
            Tag::ZoneControl => "ZoneControl",
            Tag::ObjectiveSecure => "ObjectiveSecure",
            Tag::AntiTank => "AntiTank",
            Tag::FrontToBackDps => "FrontToBackDPS",
            Tag::DiveThreat => "DiveThreat",
            Tag::SideLaneThreat => "SideLaneThreat",
            Tag::Burst => "Burst",
            Tag::Poke => "Poke",
            Tag::Sustain => "Sustain",
            Tag::Siege => "Siege",
            Tag::Peel => "Peel",
            Tag::UtilityCarry => "UtilityCarry",
            Tag::PrimaryCarry => "PrimaryCarry",
            Tag::Mobility => "Mobility",
        }
    }

    /// Built-in scoring weight used when no override is configured.
    pub const fn default_weight(self) -> u32 {
        match self {
            Tag::HardEngage | Tag::Frontline | Tag::PrimaryCarry => 3,
            Tag::FollowUpEngage
            | Tag::PickThreat
            | Tag::Disengage
            | Tag::Waveclear
            | Tag::AntiTank
            | Tag::FrontToBackDps
            | Tag::DiveThreat
            | Tag::SideLaneThreat => 2,
            Tag::ZoneControl
            | Tag::ObjectiveSecure
            | Tag::Burst
            | Tag::Poke
            | Tag::Sustain
            | Tag::Siege
            | Tag::Peel
            | Tag::UtilityCarry
            | Tag::Mobility => 1,
        }
    }

    /// Returns true for the tags that make a top laner count as a threat.
    #[inline]
    pub const fn is_top_threat(self) -> bool {
        matches!(self, Tag::SideLaneThreat | Tag::DiveThreat)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Tag::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DraftError::Parse(format!("unknown tag '{}'", needle)))
    }
}

/// Total mapping from every [`Tag`] to a boolean, stored as a bitset.
///
/// # Example
///
/// ```
/// use draftforge_core::{Tag, TagSet};
///
/// let tags: TagSet = [Tag::Frontline, Tag::HardEngage].into_iter().collect();
/// assert!(tags.contains(Tag::Frontline));
/// assert!(!tags.contains(Tag::Poke));
/// assert_eq!(tags.len(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TagSet {
    bits: u32,
}

impl TagSet {
    pub const EMPTY: TagSet = TagSet { bits: 0 };

    pub fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    pub fn contains(&self, tag: Tag) -> bool {
        self.bits & (1 << tag.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, tag: Tag) {
        self.bits |= 1 << tag.index();
    }

    #[inline]
    pub fn remove(&mut self, tag: Tag) {
        self.bits &= !(1 << tag.index());
    }

    /// Sets the tag to the given value.
    pub fn set(&mut self, tag: Tag, value: bool) {
        if value {
            self.insert(tag);
        } else {
            self.remove(tag);
        }
    }

    pub fn with(mut self, tag: Tag) -> Self {
        self.insert(tag);
        self
    }

    pub fn union(&self, other: &TagSet) -> TagSet {
        TagSet {
            bits: self.bits | other.bits,
        }
    }

    /// Returns true if the sets share at least one tag.
    pub fn intersects(&self, other: &TagSet) -> bool {
        self.bits & other.bits != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates set tags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        Tag::ALL.iter().copied().filter(move |t| self.contains(*t))
    }

    /// Returns true if any tag qualifies a top laner as a threat.
    pub fn has_top_threat(&self) -> bool {
        self.contains(Tag::SideLaneThreat) || self.contains(Tag::DiveThreat)
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<const N: usize> From<[Tag; N]> for TagSet {
    fn from(tags: [Tag; N]) -> Self {
        tags.into_iter().collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TagSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(Tag::ALL.iter().map(|t| (t, self.contains(*t))))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TagSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flags = std::collections::BTreeMap::<Tag, bool>::deserialize(deserializer)?;
        Ok(flags
            .into_iter()
            .filter_map(|(tag, on)| on.then_some(tag))
            .collect())
    }
}
