//! Shared test fixtures for DraftForge crates.
//!
//! This crate provides data only. It does NOT depend on
//! `draftforge-scoring` or `draftforge-solver` to avoid circular
//! dependencies.
//!
//! - [`champions`] - a sample champion catalog and a terse constructor
//! - [`pools`] - role pools derived from a catalog
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! draftforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use draftforge_test::{sample_catalog, sample_pools, TEAM};
//! ```

pub mod champions;
pub mod pools;

pub use champions::{champion, sample_catalog};
pub use pools::{pools_from_catalog, sample_pools, TEAM};
