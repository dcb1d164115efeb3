//! Lint for duplicate root type names.

use std::collections::HashSet;

use fhirts_ir::TypeGraph;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when two root types share a name.
pub struct DuplicateTypeLint;

impl Lint for DuplicateTypeLint {
    fn name(&self) -> &'static str {
        "duplicate-type"
    }

    fn description(&self) -> &'static str {
        "Detect root types that share a name"
    }

    fn check(&self, graph: &TypeGraph, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        for name in graph.iter().filter_map(|t| t.name()) {
            if !seen.insert(name) {
                diagnostics.push(Diagnostic::error(
                    "validate",
                    format!("Duplicate type name '{name}'."),
                ));
            }
        }
    }
}
