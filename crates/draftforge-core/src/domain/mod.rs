//! Domain model for draft recommendation
//!
//! - `Slot`, `DamageType`, `Scaling`, `Tag`: the fixed vocabulary
//! - `Champion` / `Catalog`: immutable champion records, owned by name
//! - `TeamState`: the partial team being drafted
//! - `RolePoolProvider`: per-team, per-slot legal champion lists

mod champion;
mod pools;
mod tag;
mod team;
mod vocabulary;


pub use champion::{Catalog, Champion};
pub use pools::{RolePoolProvider, RolePools};
pub use tag::{Tag, TagSet};
pub use team::TeamState;
pub use vocabulary::{DamageType, Scaling, Slot};
