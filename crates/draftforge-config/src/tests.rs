//! Tests for draft configuration.

use std::io::Write;

use draftforge_core::Tag;

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        role_order = ["Top", "Support"]
        excluded = ["Aatrox", "Yasuo"]

        [requirements]
        require_disengage = true
        top_must_be_threat = false

        [weights]
        Frontline = 5
        Poke = 0

        [search]
        max_depth = 4
        max_branch = 3
        min_candidate_score = 2
        prune_unreachable_required = false
    "#;

    let config = DraftConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.role_order, vec![Slot::Top, Slot::Support]);
    assert_eq!(config.excluded.len(), 2);
    assert!(config.requirements.require_disengage);
    assert!(!config.requirements.top_must_be_threat);
    assert!(config.requirements.require_frontline);
    assert_eq!(config.weights.weight(Tag::Frontline), 5);
    assert_eq!(config.weights.weight(Tag::Poke), 0);
    assert_eq!(config.weights.weight(Tag::Waveclear), 2);
    assert_eq!(config.search.max_depth, 4);
    assert_eq!(config.search.min_candidate_score, 2);
    assert!(!config.search.prune_unreachable_required);
    assert_eq!(config.search.rank_goal, RankGoal::CandidateScore);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        requirements:
          requireAntiTank: true
        search:
          max_depth: 1
          rank_goal: valid_end_states
          parallel: true
        excluded:
          - Aatrox
    "#;

    let config = DraftConfig::from_yaml_str(yaml).unwrap();
    assert!(config.requirements.require_anti_tank);
    assert_eq!(config.search.max_depth, 1);
    assert_eq!(config.search.max_branch, 5);
    assert_eq!(config.search.rank_goal, RankGoal::ValidEndStates);
    assert!(config.search.parallel);
    assert_eq!(config.excluded, vec!["Aatrox".to_string()]);
}

#[test]
fn test_empty_document_is_default() {
    let config = DraftConfig::from_toml_str("").unwrap();
    assert_eq!(config, DraftConfig::default());
}

#[test]
fn test_out_of_range_search_is_rejected() {
    let err = DraftConfig::from_toml_str("[search]\nmax_branch = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = DraftConfig::from_yaml_str("search:\n  max_depth: 9\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_search_validate_bounds() {
    assert!(SearchConfig::new().with_max_depth(0).validate().is_ok());
    assert!(SearchConfig::new().with_max_depth(5).validate().is_ok());
    assert!(SearchConfig::new().with_max_branch(25).validate().is_ok());
    assert!(SearchConfig::new().with_max_branch(26).validate().is_err());
    assert!(SearchConfig::new()
        .with_min_candidate_score(1_001)
        .validate()
        .is_err());
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let err = DraftConfig::load("/nonexistent/draft.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert_eq!(
        DraftConfig::load("/nonexistent/draft.toml").unwrap_or_default(),
        DraftConfig::default()
    );
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[search]\nmax_branch = 2").unwrap();

    let config = DraftConfig::load(file.path()).unwrap();
    assert_eq!(config.search.max_branch, 2);
}

#[test]
fn test_builder() {
    let config = DraftConfig::new()
        .with_role_order([Slot::Jungle])
        .with_excluded("Aatrox")
        .with_search(SearchConfig::new().with_max_depth(3))
        .with_weights(TagWeights::new().with(Tag::Peel, 4));

    assert_eq!(config.role_order, vec![Slot::Jungle]);
    assert_eq!(config.excluded, vec!["Aatrox".to_string()]);
    assert_eq!(config.search.max_depth, 3);
    assert_eq!(config.weights.weight(Tag::Peel), 4);
}

#[test]
fn test_rank_goal_display() {
    assert_eq!(RankGoal::CandidateScore.to_string(), "candidate_score");
    assert_eq!(RankGoal::ValidEndStates.to_string(), "valid_end_states");
}
