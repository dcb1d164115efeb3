//! Pipeline orchestrator.

use eyre::{Context, Result};
use fhirts_spec::{Config, DocumentMap};

use super::{
    CompilationContext, Phase, Plugin,
    phases::{LoadPhase, ResolvePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline manages the execution of compilation phases and plugin hooks.
/// It runs built-in phases (load, resolve, validate) followed by any user
/// phases, calling plugin hooks before and after each phase. Later phases
/// assume a sound input, so the pipeline stops after the first phase that
/// records an error diagnostic.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(TimingPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(config)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline, loading documents from the configured directory.
    ///
    /// Executes all phases in order:
    /// 1. LoadPhase - reads the specification documents
    /// 2. ResolvePhase - builds the type graph
    /// 3. ValidatePhase - lints the graph
    /// 4. User phases (if any)
    ///
    /// Plugin hooks are called before and after each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Error diagnostics are
    /// not fatal; they are returned in the context.
    pub fn run(&self, config: Config) -> Result<CompilationContext> {
        self.run_context(CompilationContext::new(config))
    }

    /// Run the pipeline over documents that are already loaded.
    pub fn run_with_documents(
        &self,
        config: Config,
        documents: DocumentMap,
    ) -> Result<CompilationContext> {
        self.run_context(CompilationContext::with_documents(config, documents))
    }

    fn run_context(&self, mut ctx: CompilationContext) -> Result<CompilationContext> {
        // Built-in phases in execution order
        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(LoadPhase),
            Box::new(ResolvePhase),
            Box::new(ValidatePhase::new()),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;

            if ctx.has_errors() {
                tracing::debug!(
                    phase = phase.name(),
                    errors = ctx.error_count(),
                    "stopping pipeline"
                );
                break;
            }
        }

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let name = phase.name();
        tracing::debug!(phase = name, "{}", phase.description());

        for plugin in &self.plugins {
            plugin
                .on_before_phase(name, ctx)
                .wrap_err_with(|| format!("plugin '{}' failed before {name}", plugin.name()))?;
        }

        phase.run(ctx).wrap_err_with(|| format!("{name} phase failed"))?;

        for plugin in &self.plugins {
            plugin
                .on_after_phase(name, ctx)
                .wrap_err_with(|| format!("plugin '{}' failed after {name}", plugin.name()))?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
