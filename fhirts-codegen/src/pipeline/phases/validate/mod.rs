//! Validate phase - runs lints on the resolved type graph.

mod lint;
pub mod lints;

use eyre::Result;
pub use lint::Lint;
pub use lints::{DuplicateTypeLint, MemberNameLint, ReachabilityLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the type graph using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateTypeLint),
                Box::new(ReachabilityLint),
                Box::new(MemberNameLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check type graph integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let graph = ctx.graph()?;
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            let before = diagnostics.len();
            lint.check(graph, &mut diagnostics);
            tracing::trace!(
                lint = lint.name(),
                found = diagnostics.len() - before,
                "{}",
                lint.description()
            );
        }
        ctx.diagnostics.extend(diagnostics);

        Ok(())
    }
}
