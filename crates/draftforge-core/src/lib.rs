//! DraftForge Core - Vocabulary and domain types for draft recommendation
//!
//! This crate provides the fundamental abstractions for DraftForge:
//! - Fixed vocabulary: role slots, damage types, scaling tiers, capability tags
//! - Champion records and the catalog that owns them
//! - Team state (one optional champion per slot)
//! - Role pools supplied per team
//! - Requirement toggles and tag weights

pub mod domain;
pub mod error;
pub mod requirements;
pub mod weights;

pub use domain::{
    Catalog, Champion, DamageType, RolePoolProvider, RolePools, Scaling, Slot, Tag, TagSet,
    TeamState,
};
pub use error::{DraftError, Result};
pub use requirements::RequirementToggles;
pub use weights::TagWeights;
