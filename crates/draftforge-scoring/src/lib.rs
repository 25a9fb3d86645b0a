//! Composition checks and candidate scoring for DraftForge.
//!
//! This crate provides the two pure evaluators the tree builder calls:
//! - [`evaluate_checks`]: per-check verdicts and the missing-needs summary
//!   for a team state
//! - [`score_candidate`]: the incremental score and rationale of one
//!   candidate against those missing needs
//!
//! Neither holds state; every call is a function of its explicit inputs.

pub mod candidate;
pub mod checks;

#[cfg(test)]
mod tests;

pub use candidate::{score_candidate, CandidateScore, DAMAGE_MIX_BONUS, REQUIRED_CHECK_FLOOR};
pub use checks::{
    evaluate_checks, CheckEvaluation, CheckId, CheckResult, CheckStatus, Helpers, MissingNeeds,
    Requirement,
};
