//! Type graph resolution.
//!
//! The [`Resolver`] walks the loaded documents depth-first, starting from
//! every resource definition, and resolves each document it reaches at most
//! once. A document's type is created in an arena as soon as resolution of
//! that document starts, so a reference cycle back into it receives the
//! partially built type instead of recursing forever.

mod members;
mod options;
mod state;
mod structure;
mod value_set;

use std::{collections::HashMap, path::Path};

use fhirts_ir::{Type, TypeGraph};
use fhirts_spec::{Document, DocumentMap, SpecificationDocument, model::StructureKind};
pub use options::{MAX_NAME_LENGTH, ResolveOptions};
use state::{Colour, DocState, TypeId};

use crate::pipeline::Diagnostic;

/// Phase name used on resolver diagnostics.
pub const PHASE: &str = "resolve";

/// Result of resolving a document set.
#[derive(Debug)]
pub struct Resolution {
    pub graph: TypeGraph,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }
}

/// Resolve `documents` into a type graph.
pub fn resolve(documents: &DocumentMap, options: &ResolveOptions) -> Resolution {
    Resolver::new(documents, options).run()
}

/// Depth-first resolver over a document set.
pub struct Resolver<'a> {
    documents: &'a DocumentMap,
    options: &'a ResolveOptions,
    states: HashMap<&'a str, DocState>,
    /// Every type created so far, including ones still under construction.
    types: Vec<Type>,
    /// Root types already placed in the output.
    by_name: HashMap<String, TypeId>,
    order: Vec<TypeId>,
    diagnostics: Vec<Diagnostic>,
    current: Option<&'a Path>,
}

impl<'a> Resolver<'a> {
    pub fn new(documents: &'a DocumentMap, options: &'a ResolveOptions) -> Self {
        Self {
            documents,
            options,
            states: HashMap::new(),
            types: Vec::new(),
            by_name: HashMap::new(),
            order: Vec::new(),
            diagnostics: Vec::new(),
            current: None,
        }
    }

    /// Resolve every resource definition and everything it reaches.
    pub fn run(mut self) -> Resolution {
        let documents = self.documents;
        for (id, doc) in documents {
            let Document::StructureDefinition(sd) = &doc.content else {
                continue;
            };
            if sd.kind != Some(StructureKind::Resource) {
                continue;
            }

            if sd.is_constraint() {
                tracing::debug!(file = %doc.filename.display(), "skipping constrained resource definition");
                self.diagnostics.push(
                    Diagnostic::warning(PHASE, "Skipping constrained type resource definition.")
                        .at(doc.filename.display().to_string()),
                );
                continue;
            }

            self.reference(id);
        }

        tracing::info!(
            types = self.order.len(),
            errors = self.diagnostics.iter().filter(|d| d.severity.is_error()).count(),
            "resolved type graph"
        );
        self.finish()
    }

    fn finish(self) -> Resolution {
        let mut slots: Vec<Option<Type>> = self.types.into_iter().map(Some).collect();
        let types = self
            .order
            .iter()
            .filter_map(|&id| slots.get_mut(id).and_then(Option::take))
            .collect();

        Resolution {
            graph: TypeGraph::new(types),
            diagnostics: self.diagnostics,
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        let mut diagnostic = Diagnostic::error(PHASE, message);
        if let Some(path) = self.current {
            diagnostic = diagnostic.at(path.display().to_string());
        }
        self.diagnostics.push(diagnostic);
    }

    fn state(&mut self, id: &'a str) -> &mut DocState {
        self.states.entry(id).or_default()
    }

    fn document(&self, id: &str) -> Option<&'a SpecificationDocument> {
        self.documents.get(id)
    }

    /// The document key for `id`, borrowed from the document map.
    fn key(&self, id: &str) -> Option<&'a str> {
        self.documents.get_key_value(id).map(|(k, _)| k.as_str())
    }

    /// Select a document for output, resolving it first if needed.
    fn reference(&mut self, id: &str) -> Option<TypeId> {
        let key = self.key(id)?;
        let state = self.state(key);

        if state.referenced {
            if state.colour == Colour::InProgress {
                tracing::debug!(id = key, "reference cycle, using partially resolved type");
            }
            return state.ty;
        }
        state.referenced = true;

        self.process(key);

        let ty = self.state(key).ty;
        if let Some(ty) = ty {
            self.add_to_results(ty);
        }
        ty
    }

    /// Resolve a document without selecting it for output.
    fn process(&mut self, id: &'a str) {
        if self.state(id).colour != Colour::Unvisited {
            return;
        }
        let Some(doc) = self.document(id) else {
            return;
        };
        self.state(id).colour = Colour::InProgress;

        let previous = self.current.replace(&doc.filename);
        tracing::debug!(file = %doc.filename.display(), "processing document");

        match &doc.content {
            Document::StructureDefinition(sd) => self.resolve_structure(doc, sd),
            Document::ValueSet(vs) => self.resolve_value_set(doc, vs),
            Document::CodeSystem(cs) => self.resolve_code_system(doc, cs),
        }

        self.state(id).colour = Colour::Done;
        self.current = previous;
    }

    /// Place a new type in the arena as the type of `doc`.
    fn create(&mut self, doc: &'a SpecificationDocument, ty: Type) -> TypeId {
        let id = self.alloc(ty);
        self.state(&doc.id).ty = Some(id);
        id
    }

    fn alloc(&mut self, ty: Type) -> TypeId {
        self.types.push(ty);
        self.types.len() - 1
    }

    fn add_to_results(&mut self, id: TypeId) {
        let Some(name) = self.types[id].name().map(str::to_owned) else {
            return;
        };
        if self.by_name.contains_key(&name) {
            self.error(format!("Duplicate type name '{name}'."));
            return;
        }
        self.by_name.insert(name, id);
        self.order.push(id);
    }

    fn type_name(&self, id: TypeId) -> &str {
        self.types[id].name().unwrap_or_default()
    }

    /// Look up a type by name, resolving its document on first use.
    fn type_by_name(&mut self, name: &str) -> Option<TypeId> {
        if let Some(&id) = self.by_name.get(name) {
            return Some(id);
        }
        self.reference(name)
    }

    /// Reference a document the emitted output names implicitly.
    fn reference_if_known(&mut self, id: &str) {
        if self.documents.contains_key(id) {
            self.reference(id);
        }
    }
}

#[cfg(test)]
mod tests;
