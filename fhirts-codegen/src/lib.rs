//! Resolution and code generation machinery for the fhirts generator.
//!
//! This crate turns loaded specification documents into a resolved type
//! graph and provides the language-agnostic pieces emitters are built from.
//!
//! # Module Organization
//!
//! - [`resolve`] - Type graph resolution from specification documents
//! - [`pipeline`] - Phase runner, diagnostics, lints and plugins
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Emitter abstractions (LanguageCodegen, TypeMapper, etc.)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
