//! Compilation pipeline for declaration generation.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the phases
//! from loading specification documents to a validated type graph. The
//! pipeline provides:
//!
//! - Explicit phase boundaries (load → resolve → validate)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use fhirts_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(config)?;
//!
//! for diag in ctx.errors() {
//!     println!("{}", diag.message);
//! }
//!
//! let generator = fhirts_codegen_typescript::Generator::from_context(&ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;
mod timing;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
pub use timing::TimingPlugin;
