//! Error types for DraftForge

use thiserror::Error;

/// Main error type for DraftForge operations.
///
/// Every variant signals a caller contract violation. Search exhaustion
/// (empty pools, fully excluded candidates, unreachable requirements) is
/// represented in the output tree and never surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// A team state or role pool names a champion missing from the catalog.
    #[error("Unknown champion: {0}")]
    UnknownChampion(String),

    /// No role pools are registered for the team identifier.
    #[error("No role pools registered for team: {0}")]
    UnknownTeam(String),

    /// Search parameters fall outside their accepted ranges.
    #[error("Invalid search parameters: {0}")]
    InvalidSearch(String),

    /// A configuration file exists but could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A vocabulary value could not be parsed from text.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for DraftForge operations
pub type Result<T> = std::result::Result<T, DraftError>;
