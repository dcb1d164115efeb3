//! Phase timing plugin.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
    time::Instant,
};

use eyre::Result;

use super::{CompilationContext, Plugin};

/// A plugin that logs how long each phase takes.
#[derive(Default)]
pub struct TimingPlugin {
    start_times: Mutex<HashMap<String, Instant>>,
}

impl TimingPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for TimingPlugin {
    fn name(&self) -> &'static str {
        "timing"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        self.start_times
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(phase.to_string(), Instant::now());
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let start = self
            .start_times
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(phase);

        if let Some(start) = start {
            tracing::info!(
                phase,
                elapsed = ?start.elapsed(),
                errors = ctx.error_count(),
                "phase complete"
            );
        }
        Ok(())
    }
}
