//! Lint for enumeration member names.

use std::collections::HashSet;

use fhirts_ir::TypeGraph;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on empty or repeated member names within an enumeration.
pub struct MemberNameLint;

impl Lint for MemberNameLint {
    fn name(&self) -> &'static str {
        "member-name"
    }

    fn description(&self) -> &'static str {
        "Check enumeration member names are present and unique"
    }

    fn check(&self, graph: &TypeGraph, diagnostics: &mut Vec<Diagnostic>) {
        for enumeration in graph.enums() {
            let mut seen = HashSet::new();
            for member in &enumeration.members {
                if member.name.is_empty() {
                    diagnostics.push(Diagnostic::error(
                        "validate",
                        format!(
                            "Member '{}' of '{}' has no name.",
                            member.value, enumeration.name
                        ),
                    ));
                } else if !seen.insert(member.name.as_str()) {
                    diagnostics.push(Diagnostic::error(
                        "validate",
                        format!(
                            "Duplicate member name '{}' in '{}'.",
                            member.name, enumeration.name
                        ),
                    ));
                }
            }
        }
    }
}
