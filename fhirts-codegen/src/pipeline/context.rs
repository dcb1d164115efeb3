//! Compilation context passed through pipeline phases.

use eyre::{OptionExt, Result};
use fhirts_ir::TypeGraph;
use fhirts_spec::{Config, DocumentMap};

use super::Diagnostic;

/// State handed from phase to phase.
///
/// Each phase fills in its slot and appends diagnostics; nothing is removed.
#[derive(Debug)]
pub struct CompilationContext {
    pub config: Config,
    /// The loaded specification documents (populated by LoadPhase).
    pub documents: Option<DocumentMap>,
    /// The resolved type graph (populated by ResolvePhase).
    pub graph: Option<TypeGraph>,
    /// In the order the phases recorded them.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            documents: None,
            graph: None,
            diagnostics: Vec::new(),
        }
    }

    /// Start with documents already in memory; `LoadPhase` then does nothing.
    pub fn with_documents(config: Config, documents: DocumentMap) -> Self {
        Self {
            documents: Some(documents),
            ..Self::new(config)
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// The loaded documents.
    ///
    /// # Errors
    ///
    /// Fails if LoadPhase has not run.
    pub fn documents(&self) -> Result<&DocumentMap> {
        self.documents
            .as_ref()
            .ok_or_eyre("documents not loaded - did LoadPhase run?")
    }

    /// The resolved type graph.
    ///
    /// # Errors
    ///
    /// Fails if ResolvePhase has not run.
    pub fn graph(&self) -> Result<&TypeGraph> {
        self.graph
            .as_ref()
            .ok_or_eyre("type graph not set - did ResolvePhase run?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(Config::default());

        assert!(ctx.documents.is_none());
        assert!(ctx.graph.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.graph().is_err());
    }

    #[test]
    fn test_errors_and_warnings_are_split() {
        let mut ctx = CompilationContext::new(Config::default());
        ctx.push(Diagnostic::warning("load", "just a warning"));
        assert!(!ctx.has_errors());

        ctx.push(Diagnostic::error("resolve", "Unknown base type 'Base'.").at("a.json"));
        assert!(ctx.has_errors());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warnings().count(), 1);
        assert_eq!(ctx.errors().next().unwrap().to_string(), "a.json: Unknown base type 'Base'.");
    }

    #[test]
    fn test_documents_require_load() {
        let ctx = CompilationContext::with_documents(Config::default(), Default::default());
        assert!(ctx.documents().unwrap().is_empty());
        assert!(CompilationContext::new(Config::default()).documents().is_err());
    }
}
