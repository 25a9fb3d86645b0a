//! Tests for composition check evaluation.

use draftforge_core::{DraftError, RequirementToggles, Slot, Tag, TeamState};
use draftforge_test::sample_catalog;

use crate::checks::{evaluate_checks, CheckEvaluation, CheckId, CheckStatus, Requirement};

fn evaluate(team: &TeamState, toggles: RequirementToggles) -> CheckEvaluation {
    evaluate_checks(team, &sample_catalog(), &toggles).unwrap()
}

fn azir_ashe() -> TeamState {
    TeamState::new().with(Slot::Mid, "Azir").with(Slot::Adc, "Ashe")
}

#[test]
fn test_empty_team_all_checks_present() {
    let eval = evaluate(&TeamState::new(), RequirementToggles::default());
    assert_eq!(eval.checks.len(), CheckId::ALL.len());
    assert!(eval.checks.values().all(|c| !c.satisfied));
    assert!(eval.helpers.filled.is_empty());
    assert_eq!(eval.helpers.distinct_tags(), 0);
}

#[test]
fn test_empty_team_missing_needs() {
    let eval = evaluate(&TeamState::new(), RequirementToggles::default());
    let needs = &eval.missing_needs;
    assert_eq!(
        needs.tags,
        vec![Tag::HardEngage, Tag::Frontline, Tag::Waveclear, Tag::PrimaryCarry]
    );
    assert!(needs.needs_ad);
    assert!(needs.needs_ap);
    assert!(!needs.needs_top_threat);
    assert!(needs.needs_tag(Tag::PrimaryCarry));
    assert!(!needs.needs_tag(Tag::AntiTank));
    assert!(!needs.is_empty());
}

#[test]
fn test_top_threat_not_applicable_while_top_empty() {
    let eval = evaluate(&azir_ashe(), RequirementToggles::default());
    let top = eval.check(CheckId::TopMustBeThreat).unwrap();
    assert!(top.required);
    assert!(!top.satisfied);
    assert!(!top.is_applicable());
    assert_eq!(top.status, CheckStatus::Good);
    assert_eq!(top.requirement, Requirement::TopThreat { applicable: false });
}

#[test]
fn test_partial_team_verdicts() {
    let eval = evaluate(&azir_ashe(), RequirementToggles::default());

    assert!(eval.check(CheckId::HasWaveclear).unwrap().satisfied);
    assert!(eval.check(CheckId::HasPrimaryCarry).unwrap().satisfied);
    assert!(eval.check(CheckId::HasDisengage).unwrap().satisfied);
    assert!(eval.check(CheckId::DamageMix).unwrap().satisfied);
    assert!(!eval.check(CheckId::HasFrontline).unwrap().satisfied);
    assert_eq!(
        eval.check(CheckId::HasFrontline).unwrap().status,
        CheckStatus::Warn
    );

    assert_eq!(eval.missing_needs.tags, vec![Tag::HardEngage, Tag::Frontline]);
    assert!(!eval.missing_needs.needs_ad);
    assert!(!eval.missing_needs.needs_ap);
    assert_eq!(
        eval.unsatisfied_required(),
        vec![CheckId::HasHardEngage, CheckId::HasFrontline, CheckId::TopMustBeThreat]
    );
    assert!(!eval.all_required_satisfied());
}

#[test]
fn test_helpers() {
    let eval = evaluate(&azir_ashe(), RequirementToggles::default());
    let helpers = &eval.helpers;
    assert_eq!(
        helpers.filled,
        vec![(Slot::Mid, "Azir".to_string()), (Slot::Adc, "Ashe".to_string())]
    );
    assert_eq!(helpers.tag_counts.len(), Tag::COUNT);
    assert_eq!(helpers.tag_count(Tag::Waveclear), 1);
    assert_eq!(helpers.tag_count(Tag::Frontline), 0);
    assert_eq!(helpers.distinct_tags(), 8);
    assert!(helpers.has_ad);
    assert!(helpers.has_ap);
}

#[test]
fn test_reason_names_providers() {
    let team = azir_ashe().with(Slot::Jungle, "Lillia");
    let eval = evaluate(&team, RequirementToggles::default());
    assert_eq!(
        eval.check(CheckId::HasWaveclear).unwrap().reason,
        "Waveclear provided by Lillia, Azir"
    );
    assert_eq!(
        eval.check(CheckId::HasFrontline).unwrap().reason,
        "No selected champion provides Frontline"
    );
}

#[test]
fn test_non_threat_top_is_needed() {
    let team = TeamState::new().with(Slot::Top, "Ornn");
    let eval = evaluate(&team, RequirementToggles::default());
    let top = eval.check(CheckId::TopMustBeThreat).unwrap();
    assert!(top.is_applicable());
    assert!(!top.satisfied);
    assert_eq!(top.status, CheckStatus::Warn);
    assert!(eval.missing_needs.needs_top_threat);
}

#[test]
fn test_threat_top_satisfies() {
    let team = TeamState::new().with(Slot::Top, "Camille");
    let eval = evaluate(&team, RequirementToggles::default());
    let top = eval.check(CheckId::TopMustBeThreat).unwrap();
    assert!(top.satisfied);
    assert_eq!(top.reason, "Top Camille is a threat (DiveThreat, SideLaneThreat)");
    assert!(!eval.missing_needs.needs_top_threat);
}

#[test]
fn test_top_threat_not_needed_when_toggle_off() {
    let team = TeamState::new().with(Slot::Top, "Ornn");
    let eval = evaluate(&team, RequirementToggles::default().with_top_threat(false));
    assert!(!eval.check(CheckId::TopMustBeThreat).unwrap().required);
    assert!(!eval.missing_needs.needs_top_threat);
}

#[test]
fn test_mixed_damage_satisfies_mix_alone() {
    let team = TeamState::new().with(Slot::Adc, "Kaisa");
    let eval = evaluate(&team, RequirementToggles::default());
    assert!(eval.check(CheckId::DamageMix).unwrap().satisfied);
    assert!(!eval.missing_needs.needs_ad);
    assert!(!eval.missing_needs.needs_ap);
}

#[test]
fn test_damage_needs_require_toggle() {
    let eval = evaluate(
        &TeamState::new().with(Slot::Adc, "Ashe"),
        RequirementToggles::default().with_damage_mix(false),
    );
    assert!(!eval.check(CheckId::DamageMix).unwrap().satisfied);
    assert!(!eval.missing_needs.needs_ap);
}

#[test]
fn test_toggles_never_skip_evaluation() {
    let eval = evaluate(&azir_ashe(), RequirementToggles::none());
    assert!(eval.checks.values().all(|c| !c.required));
    assert!(eval.check(CheckId::HasWaveclear).unwrap().satisfied);
    assert!(eval.missing_needs.is_empty());
    assert!(eval.all_required_satisfied());
}

#[test]
fn test_informational_checks_never_required() {
    let eval = evaluate(&TeamState::new(), RequirementToggles::all());
    for id in [
        CheckId::HasSustain,
        CheckId::HasSiege,
        CheckId::HasPeel,
        CheckId::HasUtilityCarry,
    ] {
        assert!(!eval.check(id).unwrap().required, "{} should be informational", id);
    }
    assert!(eval.check(CheckId::HasAntiTank).unwrap().required);
}

#[test]
fn test_unknown_champion_is_fatal() {
    let team = TeamState::new().with(Slot::Mid, "Azir").with(Slot::Top, "Teemo");
    let err = evaluate_checks(&team, &sample_catalog(), &RequirementToggles::default()).unwrap_err();
    assert_eq!(err, DraftError::UnknownChampion("Teemo".to_string()));
}

#[test]
fn test_check_serialization_shape() {
    let eval = evaluate(&azir_ashe(), RequirementToggles::default());
    let json = serde_json::to_value(&eval).unwrap();

    let frontline = &json["checks"]["HasFrontline"];
    assert_eq!(frontline["requirementType"], "tag");
    assert_eq!(frontline["tag"], "Frontline");
    assert_eq!(frontline["status"], "warn");
    assert_eq!(json["checks"]["TopMustBeThreat"]["applicable"], false);
    assert_eq!(json["checks"]["DamageMix"]["requirementType"], "damage_mix");
    assert_eq!(json["missingNeeds"]["tags"][0], "HardEngage");
}
