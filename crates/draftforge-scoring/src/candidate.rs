// Incremental scoring of one candidate against the team's missing needs.

use draftforge_core::{Champion, TagWeights};
use serde::Serialize;

use crate::checks::{CheckEvaluation, CheckId};

/// Points for covering a missing damage side.
pub const DAMAGE_MIX_BONUS: u32 = 2;

/// Points for resolving a required check whose configured weight is zero.
pub const REQUIRED_CHECK_FLOOR: u32 = 1;

/// Incremental score of one candidate, with the lines that explain it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateScore {
    pub score: u32,
    pub rationale: Vec<String>,
}

/// Scores `candidate` against the missing needs of `evaluation`.
///
/// Rules are applied independently and summed. A required tag the
/// candidate supplies earns its weight; at weight zero it earns
/// [`REQUIRED_CHECK_FLOOR`] instead so the resolution still counts for
/// ranking. Each missing damage side the candidate covers earns
/// [`DAMAGE_MIX_BONUS`]. The sum saturates at `u32::MAX`. No ordering
/// happens here.
///
/// # Example
///
/// ```
/// use draftforge_core::{Catalog, Champion, DamageType, RequirementToggles, Scaling, Slot, Tag, TagWeights, TeamState};
/// use draftforge_scoring::{evaluate_checks, score_candidate};
///
/// let catalog = Catalog::from_champions([
///     Champion::new("Ashe", [Slot::Adc], DamageType::Ad, Scaling::Mid),
/// ]);
/// let team = TeamState::new().with(Slot::Adc, "Ashe");
/// let eval = evaluate_checks(&team, &catalog, &RequirementToggles::default()).unwrap();
///
/// let ornn = Champion::new("Ornn", [Slot::Top], DamageType::Ap, Scaling::Late)
///     .with_tags([Tag::Frontline]);
/// let scored = score_candidate(&ornn, &eval, &TagWeights::new());
///
/// // Frontline (3) + AP damage for the mix (2)
/// assert_eq!(scored.score, 5);
/// assert_eq!(scored.rationale.len(), 2);
/// ```
pub fn score_candidate(
    candidate: &Champion,
    evaluation: &CheckEvaluation,
    weights: &TagWeights,
) -> CandidateScore {
    let needs = &evaluation.missing_needs;
    let mut scored = CandidateScore::default();

    for &tag in &needs.tags {
        if !candidate.has_tag(tag) {
            continue;
        }
        let weight = weights.weight(tag);
        if weight > 0 {
            scored.score = scored.score.saturating_add(weight);
            scored.rationale.push(format!("Adds {} (+{})", tag, weight));
        } else {
            let check = CheckId::for_tag(tag).map_or(tag.as_str(), CheckId::as_str);
            scored.score = scored.score.saturating_add(REQUIRED_CHECK_FLOOR);
            scored.rationale.push(format!(
                "Resolves required {} (required-check floor +{})",
                check, REQUIRED_CHECK_FLOOR
            ));
        }
    }

    if needs.needs_ad && candidate.damage_type.covers_ad() {
        scored.score = scored.score.saturating_add(DAMAGE_MIX_BONUS);
        scored.rationale.push(format!(
            "Adds AD damage for damage mix (+{})",
            DAMAGE_MIX_BONUS
        ));
    }
    if needs.needs_ap && candidate.damage_type.covers_ap() {
        scored.score = scored.score.saturating_add(DAMAGE_MIX_BONUS);
        scored.rationale.push(format!(
            "Adds AP damage for damage mix (+{})",
            DAMAGE_MIX_BONUS
        ));
    }

    scored
}
