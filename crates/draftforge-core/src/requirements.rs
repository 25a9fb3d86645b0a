//! Requirement toggles: which composition checks are mandatory.

/// Named switches deciding which composition checks are required.
///
/// Toggles never skip a check; they only set its `required` flag. Missing
/// keys in a loaded document take the values of [`Default`].
///
/// # Example
///
/// ```
/// use draftforge_core::RequirementToggles;
///
/// let toggles = RequirementToggles::default();
/// assert!(toggles.require_hard_engage);
/// assert!(!toggles.require_anti_tank);
/// assert!(toggles.top_must_be_threat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RequirementToggles {
    #[cfg_attr(feature = "serde", serde(alias = "require_hard_engage"))]
    pub require_hard_engage: bool,
    #[cfg_attr(feature = "serde", serde(alias = "require_frontline"))]
    pub require_frontline: bool,
    #[cfg_attr(feature = "serde", serde(alias = "require_waveclear"))]
    pub require_waveclear: bool,
    #[cfg_attr(feature = "serde", serde(alias = "require_damage_mix"))]
    pub require_damage_mix: bool,
    #[cfg_attr(feature = "serde", serde(alias = "require_anti_tank"))]
    pub require_anti_tank: bool,
    #[cfg_attr(feature = "serde", serde(alias = "require_disengage"))]
    pub require_disengage: bool,
    #[cfg_attr(feature = "serde", serde(alias = "require_primary_carry"))]
    pub require_primary_carry: bool,
    #[cfg_attr(feature = "serde", serde(alias = "top_must_be_threat"))]
    pub top_must_be_threat: bool,
}

impl Default for RequirementToggles {
    fn default() -> Self {
        Self {
            require_hard_engage: true,
            require_frontline: true,
            require_waveclear: true,
            require_damage_mix: true,
            require_anti_tank: false,
            require_disengage: false,
            require_primary_carry: true,
            top_must_be_threat: true,
        }
    }
}

impl RequirementToggles {
    /// Every requirement switched on.
    pub fn all() -> Self {
        Self {
            require_hard_engage: true,
            require_frontline: true,
            require_waveclear: true,
            require_damage_mix: true,
            require_anti_tank: true,
            require_disengage: true,
            require_primary_carry: true,
            top_must_be_threat: true,
        }
    }

    /// Every requirement switched off; all checks become informational.
    pub fn none() -> Self {
        Self {
            require_hard_engage: false,
            require_frontline: false,
            require_waveclear: false,
            require_damage_mix: false,
            require_anti_tank: false,
            require_disengage: false,
            require_primary_carry: false,
            top_must_be_threat: false,
        }
    }

    pub fn with_anti_tank(mut self, on: bool) -> Self {
        self.require_anti_tank = on;
        self
    }

    pub fn with_disengage(mut self, on: bool) -> Self {
        self.require_disengage = on;
        self
    }

    pub fn with_top_threat(mut self, on: bool) -> Self {
        self.top_must_be_threat = on;
        self
    }

    pub fn with_damage_mix(mut self, on: bool) -> Self {
        self.require_damage_mix = on;
        self
    }
}
