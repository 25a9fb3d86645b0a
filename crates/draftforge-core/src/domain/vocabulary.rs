//! Closed enumerations for role slots, damage types and scaling tiers.

use std::fmt;
use std::str::FromStr;

use crate::error::DraftError;

/// One of the five role slots of a team composition.
///
/// Declaration order is the canonical pick order.
///
/// # Example
///
/// ```
/// use draftforge_core::Slot;
///
/// assert_eq!("adc".parse::<Slot>().unwrap(), Slot::Adc);
/// assert_eq!("Bot".parse::<Slot>().unwrap(), Slot::Adc);
/// assert_eq!(Slot::Adc.to_string(), "ADC");
/// assert_eq!(Slot::ALL[0], Slot::Top);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    Top,
    Jungle,
    Mid,
    #[cfg_attr(feature = "serde", serde(rename = "ADC", alias = "Adc"))]
    Adc,
    Support,
}

impl Slot {
    /// All slots in canonical order.
    pub const ALL: [Slot; 5] = [Slot::Top, Slot::Jungle, Slot::Mid, Slot::Adc, Slot::Support];

    /// Number of slots in a full team.
    pub const COUNT: usize = 5;

    /// Position of this slot in canonical order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name of the slot.
    pub const fn as_str(self) -> &'static str {
        match self {
            Slot::Top => "Top",
            Slot::Jungle => "Jungle",
            Slot::Mid => "Mid",
            Slot::Adc => "ADC",
            Slot::Support => "Support",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Slot::Top),
            "jungle" | "jg" | "jungler" => Ok(Slot::Jungle),
            "mid" | "middle" => Ok(Slot::Mid),
            "adc" | "bot" | "bottom" => Ok(Slot::Adc),
            "support" | "sup" | "supp" => Ok(Slot::Support),
            other => Err(DraftError::Parse(format!("unknown slot '{}'", other))),
        }
    }
}

/// Damage-type classification of a champion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageType {
    #[cfg_attr(feature = "serde", serde(rename = "AD"))]
    Ad,
    #[cfg_attr(feature = "serde", serde(rename = "AP"))]
    Ap,
    Mixed,
}

impl DamageType {
    /// Returns true for AD or Mixed damage.
    #[inline]
    pub const fn covers_ad(self) -> bool {
        matches!(self, DamageType::Ad | DamageType::Mixed)
    }

    /// Returns true for AP or Mixed damage.
    #[inline]
    pub const fn covers_ap(self) -> bool {
        matches!(self, DamageType::Ap | DamageType::Mixed)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DamageType::Ad => "AD",
            DamageType::Ap => "AP",
            DamageType::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DamageType {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ad" => Ok(DamageType::Ad),
            "ap" => Ok(DamageType::Ap),
            "mixed" => Ok(DamageType::Mixed),
            other => Err(DraftError::Parse(format!("unknown damage type '{}'", other))),
        }
    }
}

/// Power-curve tier of a champion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scaling {
    Early,
    #[default]
    Mid,
    Late,
}

impl Scaling {
    pub const fn as_str(self) -> &'static str {
        match self {
            Scaling::Early => "Early",
            Scaling::Mid => "Mid",
            Scaling::Late => "Late",
        }
    }
}

impl fmt::Display for Scaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scaling {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "early" => Ok(Scaling::Early),
            "mid" => Ok(Scaling::Mid),
            "late" => Ok(Scaling::Late),
            other => Err(DraftError::Parse(format!("unknown scaling '{}'", other))),
        }
    }
}
