//! Checks run over the resolved type graph.

use fhirts_ir::TypeGraph;

use crate::pipeline::Diagnostic;

/// A single check over the type graph.
///
/// Lints only append diagnostics; they never change the graph.
pub trait Lint: Send + Sync {
    /// Kebab-case name, e.g. `member-name`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, graph: &TypeGraph, diagnostics: &mut Vec<Diagnostic>);
}
