//! Composition check evaluation.
//!
//! Every check is evaluated on every call; the requirement toggles only
//! decide which verdicts are mandatory. The evaluation also derives the
//! "missing needs" summary that drives candidate scoring.

use std::collections::BTreeMap;
use std::fmt;

use draftforge_core::{
    Catalog, Champion, RequirementToggles, Result, Slot, Tag, TeamState,
};
use serde::Serialize;

/// Identifier of one composition check, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CheckId {
    HasHardEngage,
    HasFrontline,
    HasWaveclear,
    HasDisengage,
    HasAntiTank,
    HasPrimaryCarry,
    HasSustain,
    HasSiege,
    HasPeel,
    HasUtilityCarry,
    DamageMix,
    TopMustBeThreat,
}

impl CheckId {
    pub const ALL: [CheckId; 12] = [
        CheckId::HasHardEngage,
        CheckId::HasFrontline,
        CheckId::HasWaveclear,
        CheckId::HasDisengage,
        CheckId::HasAntiTank,
        CheckId::HasPrimaryCarry,
        CheckId::HasSustain,
        CheckId::HasSiege,
        CheckId::HasPeel,
        CheckId::HasUtilityCarry,
        CheckId::DamageMix,
        CheckId::TopMustBeThreat,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CheckId::HasHardEngage => "HasHardEngage",
            CheckId::HasFrontline => "HasFrontline",
            CheckId::HasWaveclear => "HasWaveclear",
            CheckId::HasDisengage => "HasDisengage",
            CheckId::HasAntiTank => "HasAntiTank",
            CheckId::HasPrimaryCarry => "HasPrimaryCarry",
            CheckId::HasSustain => "HasSustain",
            CheckId::HasSiege => "HasSiege",
            CheckId::HasPeel => "HasPeel",
            CheckId::HasUtilityCarry => "HasUtilityCarry",
            CheckId::DamageMix => "DamageMix",
            CheckId::TopMustBeThreat => "TopMustBeThreat",
        }
    }

    /// The tag a presence check looks for, if this is a tag check.
    pub const fn tag(self) -> Option<Tag> {
        match self {
            CheckId::HasHardEngage => Some(Tag::HardEngage),
            CheckId::HasFrontline => Some(Tag::Frontline),
            CheckId::HasWaveclear => Some(Tag::Waveclear),
            CheckId::HasDisengage => Some(Tag::Disengage),
            CheckId::HasAntiTank => Some(Tag::AntiTank),
            CheckId::HasPrimaryCarry => Some(Tag::PrimaryCarry),
            CheckId::HasSustain => Some(Tag::Sustain),
            CheckId::HasSiege => Some(Tag::Siege),
            CheckId::HasPeel => Some(Tag::Peel),
            CheckId::HasUtilityCarry => Some(Tag::UtilityCarry),
            CheckId::DamageMix | CheckId::TopMustBeThreat => None,
        }
    }

    /// The tag check that looks for `tag`, if any.
    pub fn for_tag(tag: Tag) -> Option<CheckId> {
        CheckId::ALL.iter().copied().find(|id| id.tag() == Some(tag))
    }

    /// Whether the toggles make this check mandatory.
    ///
    /// The four sustain/siege/peel/utility-carry checks are always informational.
    pub const fn is_required(self, toggles: &RequirementToggles) -> bool {
        match self {
            CheckId::HasHardEngage => toggles.require_hard_engage,
            CheckId::HasFrontline => toggles.require_frontline,
            CheckId::HasWaveclear => toggles.require_waveclear,
            CheckId::HasDisengage => toggles.require_disengage,
            CheckId::HasAntiTank => toggles.require_anti_tank,
            CheckId::HasPrimaryCarry => toggles.require_primary_carry,
            CheckId::HasSustain | CheckId::HasSiege | CheckId::HasPeel | CheckId::HasUtilityCarry => {
                false
            }
            CheckId::DamageMix => toggles.require_damage_mix,
            CheckId::TopMustBeThreat => toggles.top_must_be_threat,
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Good,
    Warn,
}

/// What a check inspects, with its type-specific metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "requirementType", rename_all = "snake_case")]
pub enum Requirement {
    /// At least one filled slot carries `tag`.
    Tag { tag: Tag },
    /// Both damage sides are represented.
    #[serde(rename_all = "camelCase")]
    DamageMix { has_ad: bool, has_ap: bool },
    /// The top laner is a side-lane or dive threat; inapplicable while Top is empty.
    TopThreat { applicable: bool },
}

impl Requirement {
    /// Wire name of the requirement type.
    pub const fn requirement_type(&self) -> &'static str {
        match self {
            Requirement::Tag { .. } => "tag",
            Requirement::DamageMix { .. } => "damage_mix",
            Requirement::TopThreat { .. } => "top_threat",
        }
    }
}

/// Verdict of one composition check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub id: CheckId,
    pub required: bool,
    pub satisfied: bool,
    pub status: CheckStatus,
    pub reason: String,
    #[serde(flatten)]
    pub requirement: Requirement,
}

impl CheckResult {
    /// Returns true for a required check that is not yet satisfied.
    pub fn is_open_requirement(&self) -> bool {
        self.required && !self.satisfied
    }

    /// Returns false only for TopMustBeThreat while Top is empty.
    pub fn is_applicable(&self) -> bool {
        match self.requirement {
            Requirement::TopThreat { applicable } => applicable,
            _ => true,
        }
    }
}

/// Required needs the team still lacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingNeeds {
    /// Tags of required, unsatisfied tag checks, in check order.
    pub tags: Vec<Tag>,
    pub needs_ad: bool,
    pub needs_ap: bool,
    pub needs_top_threat: bool,
}

impl MissingNeeds {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && !self.needs_ad && !self.needs_ap && !self.needs_top_threat
    }

    pub fn needs_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Derived facts about the evaluated team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Helpers {
    /// The normalized team state.
    pub team: TeamState,
    /// Filled (slot, champion) pairs in canonical slot order.
    pub filled: Vec<(Slot, String)>,
    /// How many selected champions carry each tag; every tag has an entry.
    pub tag_counts: BTreeMap<Tag, usize>,
    pub has_ad: bool,
    pub has_ap: bool,
}

impl Helpers {
    /// Number of distinct tags present anywhere on the team.
    pub fn distinct_tags(&self) -> usize {
        self.tag_counts.values().filter(|&&n| n > 0).count()
    }

    pub fn tag_count(&self, tag: Tag) -> usize {
        self.tag_counts.get(&tag).copied().unwrap_or(0)
    }
}

/// Full result of [`evaluate_checks`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckEvaluation {
    pub toggles: RequirementToggles,
    pub helpers: Helpers,
    pub checks: BTreeMap<CheckId, CheckResult>,
    pub missing_needs: MissingNeeds,
}

impl CheckEvaluation {
    pub fn check(&self, id: CheckId) -> Option<&CheckResult> {
        self.checks.get(&id)
    }

    /// Required checks in check order.
    pub fn required_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.values().filter(|c| c.required)
    }

    /// Ids of required checks that are not satisfied, in check order.
    pub fn unsatisfied_required(&self) -> Vec<CheckId> {
        self.checks
            .values()
            .filter(|c| c.is_open_requirement())
            .map(|c| c.id)
            .collect()
    }

    pub fn all_required_satisfied(&self) -> bool {
        self.required_checks().all(|c| c.satisfied)
    }
}

/// Evaluates every composition check for `team`.
///
/// # Errors
///
/// Returns [`draftforge_core::DraftError::UnknownChampion`] if the team
/// names a champion absent from `catalog`. The slot is never skipped.
///
/// # Example
///
/// ```
/// use draftforge_core::{Catalog, Champion, DamageType, RequirementToggles, Scaling, Slot, Tag, TeamState};
/// use draftforge_scoring::{evaluate_checks, CheckId};
///
/// let catalog = Catalog::from_champions([
///     Champion::new("Ornn", [Slot::Top], DamageType::Ap, Scaling::Late)
///         .with_tags([Tag::Frontline, Tag::HardEngage]),
/// ]);
/// let team = TeamState::new().with(Slot::Top, "Ornn");
///
/// let eval = evaluate_checks(&team, &catalog, &RequirementToggles::default()).unwrap();
/// assert!(eval.check(CheckId::HasFrontline).unwrap().satisfied);
/// assert!(!eval.check(CheckId::TopMustBeThreat).unwrap().satisfied);
/// assert!(eval.missing_needs.needs_ad);
/// assert!(!eval.missing_needs.needs_ap);
/// ```
pub fn evaluate_checks(
    team: &TeamState,
    catalog: &Catalog,
    toggles: &RequirementToggles,
) -> Result<CheckEvaluation> {
    let mut selected: Vec<(Slot, &Champion)> = Vec::with_capacity(Slot::COUNT);
    for (slot, name) in team.filled() {
        selected.push((slot, catalog.lookup(name)?));
    }

    let tag_counts: BTreeMap<Tag, usize> = Tag::ALL
        .iter()
        .map(|&tag| (tag, selected.iter().filter(|(_, c)| c.has_tag(tag)).count()))
        .collect();
    let has_ad = selected.iter().any(|(_, c)| c.damage_type.covers_ad());
    let has_ap = selected.iter().any(|(_, c)| c.damage_type.covers_ap());
    let top = selected
        .iter()
        .find(|(slot, _)| *slot == Slot::Top)
        .map(|(_, c)| *c);

    let mut checks = BTreeMap::new();
    for id in CheckId::ALL {
        let required = id.is_required(toggles);
        let result = match id.tag() {
            Some(tag) => tag_check(id, tag, required, &selected),
            None if id == CheckId::DamageMix => damage_mix_check(required, has_ad, has_ap),
            None => top_threat_check(required, top),
        };
        checks.insert(id, result);
    }

    let missing_needs = missing_needs(&checks, has_ad, has_ap);
    let helpers = Helpers {
        team: team.clone(),
        filled: selected
            .iter()
            .map(|(slot, c)| (*slot, c.name.clone()))
            .collect(),
        tag_counts,
        has_ad,
        has_ap,
    };

    Ok(CheckEvaluation {
        toggles: *toggles,
        helpers,
        checks,
        missing_needs,
    })
}

fn tag_check(id: CheckId, tag: Tag, required: bool, selected: &[(Slot, &Champion)]) -> CheckResult {
    let providers: Vec<&str> = selected
        .iter()
        .filter(|(_, c)| c.has_tag(tag))
        .map(|(_, c)| c.name.as_str())
        .collect();
    let satisfied = !providers.is_empty();
    let reason = if satisfied {
        format!("{} provided by {}", tag, providers.join(", "))
    } else {
        format!("No selected champion provides {}", tag)
    };
    verdict(id, required, satisfied, true, reason, Requirement::Tag { tag })
}

fn damage_mix_check(required: bool, has_ad: bool, has_ap: bool) -> CheckResult {
    let satisfied = has_ad && has_ap;
    let reason = match (has_ad, has_ap) {
        (true, true) => "AD and AP damage both present".to_string(),
        (true, false) => "Missing AP damage".to_string(),
        (false, true) => "Missing AD damage".to_string(),
        (false, false) => "Missing AD and AP damage".to_string(),
    };
    verdict(
        CheckId::DamageMix,
        required,
        satisfied,
        true,
        reason,
        Requirement::DamageMix { has_ad, has_ap },
    )
}

fn top_threat_check(required: bool, top: Option<&Champion>) -> CheckResult {
    let (applicable, satisfied, reason) = match top {
        None => (false, false, "Top is empty".to_string()),
        Some(c) if c.is_top_threat() => {
            let threats: Vec<&str> = c
                .tags
                .iter()
                .filter(|t| t.is_top_threat())
                .map(Tag::as_str)
                .collect();
            (true, true, format!("Top {} is a threat ({})", c.name, threats.join(", ")))
        }
        Some(c) => (
            true,
            false,
            format!("Top {} carries neither SideLaneThreat nor DiveThreat", c.name),
        ),
    };
    verdict(
        CheckId::TopMustBeThreat,
        required,
        satisfied,
        applicable,
        reason,
        Requirement::TopThreat { applicable },
    )
}

fn verdict(
    id: CheckId,
    required: bool,
    satisfied: bool,
    applicable: bool,
    reason: String,
    requirement: Requirement,
) -> CheckResult {
    let status = if satisfied || !applicable {
        CheckStatus::Good
    } else {
        CheckStatus::Warn
    };
    CheckResult {
        id,
        required,
        satisfied,
        status,
        reason,
        requirement,
    }
}

fn missing_needs(checks: &BTreeMap<CheckId, CheckResult>, has_ad: bool, has_ap: bool) -> MissingNeeds {
    let tags = checks
        .values()
        .filter(|c| c.is_open_requirement())
        .filter_map(|c| c.id.tag())
        .collect();
    let mix_required = checks
        .get(&CheckId::DamageMix)
        .is_some_and(|c| c.required);
    let needs_top_threat = checks
        .get(&CheckId::TopMustBeThreat)
        .is_some_and(|c| c.required && c.is_applicable() && !c.satisfied);

    MissingNeeds {
        tags,
        needs_ad: mix_required && !has_ad,
        needs_ap: mix_required && !has_ap,
        needs_top_threat,
    }
}
