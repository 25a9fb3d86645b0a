//! DraftForge - team composition recommendations in Rust
//!
//! Evaluate a partially drafted team against composition checks and
//! explore ranked continuations as a bounded possibility tree.
//!
//! # Example
//!
//! ```rust
//! use draftforge::prelude::*;
//!
//! let catalog = Catalog::from_champions([
//!     Champion::new("Camille", [Slot::Top], DamageType::Ad, Scaling::Mid)
//!         .with_tags([Tag::SideLaneThreat, Tag::DiveThreat]),
//!     Champion::new("Sejuani", [Slot::Jungle], DamageType::Ap, Scaling::Mid)
//!         .with_tags([Tag::HardEngage, Tag::Frontline]),
//! ]);
//! let pools = RolePools::new()
//!     .with_pool("blue", Slot::Top, ["Camille"])
//!     .with_pool("blue", Slot::Jungle, ["Sejuani"]);
//!
//! let config = DraftConfig::new()
//!     .with_requirements(RequirementToggles::none().with_top_threat(true))
//!     .with_search(SearchConfig::new().with_max_depth(2));
//!
//! let tree = draftforge::recommend_with(&config, &catalog, &pools, "blue", &TeamState::new()).unwrap();
//! assert_eq!(tree.recommendations()[0].champion, "Camille");
//! assert_eq!(tree.best_leaf().depth, 2);
//! ```

// Domain model
pub use draftforge_core::{
    Catalog, Champion, DamageType, DraftError, RequirementToggles, Result, RolePoolProvider,
    RolePools, Scaling, Slot, Tag, TagSet, TagWeights, TeamState,
};

// Configuration
pub use draftforge_config::{ConfigError, DraftConfig, RankGoal, SearchConfig};

// Checks and candidate scoring
pub use draftforge_scoring::{
    evaluate_checks, score_candidate, CandidateScore, CheckEvaluation, CheckId, CheckResult,
    CheckStatus, MissingNeeds,
};

// Tree search
pub use draftforge_solver::{
    GenerationStats, Pick, PossibilityTreeBuilder, Recommendation, TreeNode, Viability,
};

#[cfg(feature = "console")]
pub mod console;

mod recommend;
pub use recommend::{recommend, recommend_from, recommend_with, DEFAULT_CONFIG_PATH};

pub mod prelude {
    pub use super::{
        Catalog, Champion, DamageType, RequirementToggles, RolePools, Scaling, Slot, Tag,
        TagWeights, TeamState,
    };
    pub use super::{DraftConfig, RankGoal, SearchConfig};
    pub use super::{CheckId, CheckStatus, PossibilityTreeBuilder, TreeNode};
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use draftforge_test::{sample_catalog, sample_pools, TEAM};

    use super::*;

    #[test]
    fn test_recommend_from_missing_file_uses_defaults() {
        let catalog = sample_catalog();
        let pools = sample_pools();
        let team = TeamState::new().with(Slot::Mid, "Azir");

        let from_file =
            recommend_from("/nonexistent/draft.toml", &catalog, &pools, TEAM, &team).unwrap();
        let defaults = recommend_with(&DraftConfig::default(), &catalog, &pools, TEAM, &team).unwrap();
        assert_eq!(from_file, defaults);
    }

    #[test]
    fn test_recommend_from_rejects_out_of_range_file() {
        let catalog = sample_catalog();
        let pools = sample_pools();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nmax_depth = 9").unwrap();

        let err = recommend_from(file.path(), &catalog, &pools, TEAM, &TeamState::new()).unwrap_err();
        assert!(matches!(err, DraftError::Config(ref msg) if msg.contains("max_depth")));
    }

    #[test]
    fn test_recommend_from_rejects_malformed_file() {
        let catalog = sample_catalog();
        let pools = sample_pools();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search\nmax_depth = 2").unwrap();

        let err = recommend_from(file.path(), &catalog, &pools, TEAM, &TeamState::new()).unwrap_err();
        assert!(matches!(err, DraftError::Config(_)));
    }

    #[test]
    fn test_tree_serializes_to_json() {
        let catalog = sample_catalog();
        let pools = sample_pools();
        let config = DraftConfig::new().with_search(SearchConfig::new().with_max_depth(1));
        let tree = recommend_with(&config, &catalog, &pools, TEAM, &TeamState::new()).unwrap();

        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.contains("\"generationStats\""));
        assert!(json.contains("\"pathRationale\""));
    }
}
