//! Resolve phase - builds the type graph.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    resolve::{self, ResolveOptions},
};

/// Phase that resolves the loaded documents into a [`TypeGraph`](fhirts_ir::TypeGraph).
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        resolve::PHASE
    }

    fn description(&self) -> &'static str {
        "Resolve documents into the type graph"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let options = ResolveOptions::from_config(&ctx.config);
        let resolution = resolve::resolve(ctx.documents()?, &options);

        ctx.diagnostics.extend(resolution.diagnostics);
        ctx.graph = Some(resolution.graph);

        Ok(())
    }
}
