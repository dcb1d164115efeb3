//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`LoadPhase`] - reads specification documents from disk
//! - [`ResolvePhase`] - resolves documents into the type graph
//! - [`ValidatePhase`] - runs lints over the resolved graph

mod load;
mod resolve;
mod validate;

pub use load::LoadPhase;
pub use resolve::ResolvePhase;
pub use validate::{
    DuplicateTypeLint, Lint, MemberNameLint, ReachabilityLint, ValidatePhase,
};
