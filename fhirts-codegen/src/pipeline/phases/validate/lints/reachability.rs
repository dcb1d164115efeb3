//! Lint for references to types missing from the graph.

use std::collections::HashSet;

use fhirts_ir::TypeGraph;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when a type names another type the graph does not contain.
///
/// Value set bindings are not checked: bound enumerations are emitted
/// separately and may be left out.
pub struct ReachabilityLint;

impl Lint for ReachabilityLint {
    fn name(&self) -> &'static str {
        "reachability"
    }

    fn description(&self) -> &'static str {
        "Check every referenced type is part of the output"
    }

    fn check(&self, graph: &TypeGraph, diagnostics: &mut Vec<Diagnostic>) {
        for ty in graph {
            let owner = ty.name().unwrap_or_default();
            let mut reported = HashSet::new();
            let missing = ty
                .referenced_names()
                .into_iter()
                .filter(|name| !graph.contains(name) && reported.insert(*name));

            for name in missing {
                diagnostics.push(Diagnostic::error(
                    "validate",
                    format!("Type '{owner}' references unknown type '{name}'."),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fhirts_ir::{InterfaceType, Property, Type, TypeCategory};

    use super::*;

    fn interface(name: &str, base: Option<&str>, properties: Vec<Property>) -> Type {
        let mut interface = InterfaceType::new(name, TypeCategory::DataType);
        interface.base_type = base.map(str::to_owned);
        interface.properties = properties;
        Type::Interface(interface)
    }

    #[test]
    fn test_missing_reference() {
        let graph = TypeGraph::new(vec![
            interface("Element", None, Vec::new()),
            interface(
                "Quantity",
                Some("Element"),
                vec![
                    Property::new("unit", Type::reference("string")),
                    Property::new("code", Type::array(Type::reference("string"))),
                ],
            ),
        ]);

        let mut diagnostics = Vec::new();
        ReachabilityLint.check(&graph, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Type 'Quantity' references unknown type 'string'."
        );
    }

    #[test]
    fn test_missing_base() {
        let graph = TypeGraph::new(vec![interface("Money", Some("Quantity"), Vec::new())]);

        let mut diagnostics = Vec::new();
        ReachabilityLint.check(&graph, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'Quantity'"));
    }
}
