//! Load phase - reads specification documents.

use eyre::Result;
use fhirts_spec::load_specification;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that loads every specification document under the configured
/// directory.
///
/// Documents already present in the context are kept as they are.
pub struct LoadPhase;

impl Phase for LoadPhase {
    fn name(&self) -> &'static str {
        "load"
    }

    fn description(&self) -> &'static str {
        "Read specification documents from disk"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        if ctx.documents.is_some() {
            return Ok(());
        }

        let loaded = load_specification(&ctx.config.paths.spec);
        for error in &loaded.errors {
            ctx.push(
                Diagnostic::error(self.name(), error.to_string())
                    .at(error.path().display().to_string()),
            );
        }
        ctx.documents = Some(loaded.documents);

        Ok(())
    }
}
