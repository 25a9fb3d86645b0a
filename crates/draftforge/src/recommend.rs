//! Recommendation entry points that hide the builder wiring.

use std::io;
use std::path::Path;

use draftforge_config::{ConfigError, DraftConfig};
use draftforge_core::{Catalog, DraftError, Result, RolePoolProvider, TeamState};
use draftforge_solver::{PossibilityTreeBuilder, TreeNode};

/// Config file consulted by [`recommend`].
pub const DEFAULT_CONFIG_PATH: &str = "draft.toml";

/// Builds the possibility tree using `draft.toml` from the working
/// directory, or defaults when that file does not exist.
///
/// A file that exists but fails to read, parse or validate is reported
/// as [`DraftError::Config`].
pub fn recommend<P>(catalog: &Catalog, pools: &P, team_id: &str, team: &TeamState) -> Result<TreeNode>
where
    P: RolePoolProvider + ?Sized,
{
    recommend_from(DEFAULT_CONFIG_PATH, catalog, pools, team_id, team)
}

/// Like [`recommend`], reading the configuration from `path`.
pub fn recommend_from<P>(
    path: impl AsRef<Path>,
    catalog: &Catalog,
    pools: &P,
    team_id: &str,
    team: &TeamState,
) -> Result<TreeNode>
where
    P: RolePoolProvider + ?Sized,
{
    let path = path.as_ref();
    let config = match DraftConfig::load(path) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(
                event = "config_fallback",
                path = %path.display(),
                error = %err,
            );
            DraftConfig::default()
        }
        Err(err) => return Err(DraftError::Config(err.to_string())),
    };
    recommend_with(&config, catalog, pools, team_id, team)
}

/// Builds the possibility tree for an explicit configuration.
pub fn recommend_with<P>(
    config: &DraftConfig,
    catalog: &Catalog,
    pools: &P,
    team_id: &str,
    team: &TeamState,
) -> Result<TreeNode>
where
    P: RolePoolProvider + ?Sized,
{
    #[cfg(feature = "console")]
    crate::console::init();

    PossibilityTreeBuilder::new(catalog, pools)
        .with_config(config)
        .build(team_id, team)
}
