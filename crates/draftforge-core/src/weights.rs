// Tag weight table used by the candidate scorer.
//
// Overrides sit on top of the built-in per-tag defaults.

use std::collections::BTreeMap;

use crate::domain::Tag;

// Per-tag scoring weights with a built-in fallback table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TagWeights {
    overrides: BTreeMap<Tag, u32>,
}

impl TagWeights {
    // Creates a table with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    // Creates overrides from an iterator of (tag, weight) pairs.
    pub fn from_pairs<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Tag, u32)>,
    {
        Self {
            overrides: iter.into_iter().collect(),
        }
    }

    // Sets the weight for a tag.
    pub fn put(&mut self, tag: Tag, weight: u32) {
        self.overrides.insert(tag, weight);
    }

    pub fn with(mut self, tag: Tag, weight: u32) -> Self {
        self.put(tag, weight);
        self
    }

    // Removes the override for a tag.
    pub fn remove(&mut self, tag: Tag) -> Option<u32> {
        self.overrides.remove(&tag)
    }

    // Overridden weight, or the tag's built-in default.
    pub fn weight(&self, tag: Tag) -> u32 {
        self.overrides
            .get(&tag)
            .copied()
            .unwrap_or_else(|| tag.default_weight())
    }

    pub fn is_overridden(&self, tag: Tag) -> bool {
        self.overrides.contains_key(&tag)
    }

    // Returns the number of overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
