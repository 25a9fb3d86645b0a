//! Possibility tree search for DraftForge.
//!
//! Given a partial team, the builder enumerates bounded continuations
//! pick by pick, keeps only legal champions, ranks them with the candidate
//! scorer and reports per-node composition checks, reachability and
//! subtree statistics.
//!
//! # Example
//!
//! ```
//! use draftforge_config::SearchConfig;
//! use draftforge_core::{Catalog, Champion, DamageType, RequirementToggles, RolePools, Scaling, Slot, Tag, TeamState};
//! use draftforge_solver::PossibilityTreeBuilder;
//!
//! let catalog = Catalog::from_champions([
//!     Champion::new("Leona", [Slot::Support], DamageType::Ap, Scaling::Early)
//!         .with_tags([Tag::HardEngage, Tag::Frontline]),
//!     Champion::new("Janna", [Slot::Support], DamageType::Ap, Scaling::Mid)
//!         .with_tags([Tag::Disengage, Tag::Peel]),
//! ]);
//! let pools = RolePools::new().with_pool("blue", Slot::Support, ["Janna", "Leona"]);
//!
//! let tree = PossibilityTreeBuilder::new(&catalog, &pools)
//!     .with_toggles(RequirementToggles::none())
//!     .with_role_order([Slot::Support])
//!     .with_search(SearchConfig::new().with_max_depth(1))
//!     .build("blue", &TeamState::new())
//!     .unwrap();
//!
//! let stats = tree.generation_stats.as_ref().unwrap();
//! assert_eq!(stats.nodes_kept, 3);
//! assert_eq!(tree.children.len(), 2);
//! ```

mod builder;
mod legality;
mod node;
mod ranking;
mod reachability;
mod stats;

pub use builder::{node_score, PossibilityTreeBuilder};
pub use legality::{next_open_role, resolve_role_order};
pub use node::{BranchPotential, NodeIter, Pick, Recommendation, TreeNode, Viability};
pub use reachability::unreachable_required;
pub use stats::GenerationStats;
