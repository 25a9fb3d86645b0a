//! Configuration system for DraftForge.
//!
//! Load requirement toggles, tag weights and search bounds from TOML or
//! YAML so a deployment can retune recommendations without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use draftforge_config::{DraftConfig, RankGoal};
//! use draftforge_core::{Slot, Tag};
//!
//! let config = DraftConfig::from_toml_str(r#"
//!     role_order = ["Support", "Jungle"]
//!     excluded = ["Aatrox"]
//!
//!     [requirements]
//!     require_anti_tank = true
//!
//!     [weights]
//!     Waveclear = 0
//!
//!     [search]
//!     max_depth = 3
//!     max_branch = 4
//!     rank_goal = "valid_end_states"
//! "#).unwrap();
//!
//! assert_eq!(config.search.max_depth, 3);
//! assert_eq!(config.search.rank_goal, RankGoal::ValidEndStates);
//! assert_eq!(config.role_order, vec![Slot::Support, Slot::Jungle]);
//! assert_eq!(config.weights.weight(Tag::Waveclear), 0);
//! assert!(config.requirements.require_anti_tank);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use draftforge_config::DraftConfig;
//!
//! let config = DraftConfig::load("draft.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use draftforge_core::{DraftError, RequirementToggles, Slot, TagWeights};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted `max_depth`; a team has only this many slots to fill.
pub const MAX_DEPTH_LIMIT: usize = Slot::COUNT;

/// Largest accepted `max_branch`.
pub const MAX_BRANCH_LIMIT: usize = 25;

/// Largest accepted `min_candidate_score`.
pub const MIN_SCORE_LIMIT: u32 = 1_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<DraftError> for ConfigError {
    fn from(err: DraftError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

/// Complete recommendation configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DraftConfig {
    /// Which composition checks are mandatory.
    #[serde(default)]
    pub requirements: RequirementToggles,

    /// Per-tag overrides of the built-in weight table.
    #[serde(default)]
    pub weights: TagWeights,

    /// Search bounds and ranking.
    #[serde(default)]
    pub search: SearchConfig,

    /// Preferred pick order; unmentioned slots follow in canonical order.
    #[serde(default)]
    pub role_order: Vec<Slot>,

    /// Champions never recommended.
    #[serde(default)]
    pub excluded: Vec<String>,
}

impl DraftConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// carries out-of-range search parameters.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the search parameters against their accepted ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()?;
        Ok(())
    }

    pub fn with_requirements(mut self, requirements: RequirementToggles) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn with_weights(mut self, weights: TagWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_role_order(mut self, order: impl IntoIterator<Item = Slot>) -> Self {
        self.role_order = order.into_iter().collect();
        self
    }

    /// Adds a champion to the exclusion list.
    pub fn with_excluded(mut self, name: impl Into<String>) -> Self {
        self.excluded.push(name.into());
        self
    }
}

/// Ranking applied to candidate children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankGoal {
    /// Candidate score descending, champion name ascending.
    #[default]
    CandidateScore,

    /// Terminal-valid leaves in the subtree descending, then candidate
    /// score descending, then champion name ascending.
    ValidEndStates,
}

impl fmt::Display for RankGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankGoal::CandidateScore => write!(f, "candidate_score"),
            RankGoal::ValidEndStates => write!(f, "valid_end_states"),
        }
    }
}

/// Bounds and ranking for one possibility-tree build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Maximum recursion depth (picks beyond the starting team).
    pub max_depth: usize,

    /// Maximum children per node.
    pub max_branch: usize,

    /// Candidates scoring below this are dropped unless that empties the branch.
    pub min_candidate_score: u32,

    /// Child ordering.
    pub rank_goal: RankGoal,

    /// Whether nodes with unreachable required checks stop expanding.
    pub prune_unreachable_required: bool,

    /// Build sibling subtrees on the rayon pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            max_branch: 5,
            min_candidate_score: 0,
            rank_goal: RankGoal::CandidateScore,
            prune_unreachable_required: true,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_branch(mut self, branch: usize) -> Self {
        self.max_branch = branch;
        self
    }

    pub fn with_min_candidate_score(mut self, score: u32) -> Self {
        self.min_candidate_score = score;
        self
    }

    pub fn with_rank_goal(mut self, goal: RankGoal) -> Self {
        self.rank_goal = goal;
        self
    }

    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune_unreachable_required = prune;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rejects parameters outside their accepted ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use draftforge_config::SearchConfig;
    ///
    /// assert!(SearchConfig::default().validate().is_ok());
    /// assert!(SearchConfig::default().with_max_branch(0).validate().is_err());
    /// assert!(SearchConfig::default().with_max_depth(6).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(DraftError::InvalidSearch(format!(
                "max_depth {} exceeds {}",
                self.max_depth, MAX_DEPTH_LIMIT
            )));
        }
        if self.max_branch == 0 || self.max_branch > MAX_BRANCH_LIMIT {
            return Err(DraftError::InvalidSearch(format!(
                "max_branch {} outside 1..={}",
                self.max_branch, MAX_BRANCH_LIMIT
            )));
        }
        if self.min_candidate_score > MIN_SCORE_LIMIT {
            return Err(DraftError::InvalidSearch(format!(
                "min_candidate_score {} exceeds {}",
                self.min_candidate_score, MIN_SCORE_LIMIT
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
