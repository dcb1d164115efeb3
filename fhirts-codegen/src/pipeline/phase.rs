//! A step of the pipeline.

use eyre::Result;

use super::CompilationContext;

/// One step between a specification directory and a validated type graph.
///
/// The built-in steps are `LoadPhase`, `ResolvePhase` and `ValidatePhase`;
/// [`Pipeline::phase`](super::Pipeline::phase) appends more.
pub trait Phase: Send + Sync {
    /// Name used in diagnostics, snapshots and plugin hooks.
    fn name(&self) -> &'static str;

    /// One line for debug logs.
    fn description(&self) -> &'static str;

    /// Fails only when the phase cannot run at all. Problems in the input
    /// belong in `ctx.diagnostics`.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
