//! Hooks around pipeline phases.

use eyre::Result;

use super::CompilationContext;

/// Observer called around every phase, built-in or user supplied.
///
/// An error from either hook aborts the pipeline. [`SnapshotPlugin`](super::SnapshotPlugin)
/// and [`TimingPlugin`](super::TimingPlugin) ship with the crate.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
