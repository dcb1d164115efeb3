//! TypeScript declaration generator.

use std::path::Path;

use eyre::Result;
use fhirts_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use fhirts_core::{GeneratedFile, WriteResult};
use fhirts_ir::TypeGraph;
use fhirts_spec::EmitConfig;

use crate::files::{FhirDts, ValueSetsTs};

/// Emits `fhir.d.ts` and, when enabled, `valueSets.ts` from a resolved graph.
pub struct Generator<'a> {
    graph: &'a TypeGraph,
    emit: &'a EmitConfig,
}

impl LanguageCodegen for Generator<'_> {
    fn preview(&self) -> (Vec<PreviewFile>, Vec<String>) {
        let (files, errors) = self.files();
        let previews = files
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect();
        (previews, errors)
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let (files, errors) = self.files();
        let mut result = GenerateResult {
            errors,
            ..GenerateResult::default()
        };

        for file in &files {
            let path = file.path(output_dir);
            match file.write(output_dir)? {
                WriteResult::Written => {
                    tracing::info!(path = %path.display(), "wrote declarations");
                    result.written.push(path);
                }
                WriteResult::Unchanged => {
                    tracing::debug!(path = %path.display(), "declarations unchanged");
                    result.unchanged.push(path);
                }
            }
        }

        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(graph: &'a TypeGraph, emit: &'a EmitConfig) -> Self {
        Self { graph, emit }
    }

    /// Create a generator over the graph of a finished pipeline run.
    ///
    /// # Errors
    ///
    /// Fails if the pipeline stopped before resolving a graph.
    pub fn from_context(ctx: &'a CompilationContext) -> Result<Self> {
        Ok(Self::new(ctx.graph()?, &ctx.config.emit))
    }

    fn files(&self) -> (Vec<Box<dyn GeneratedFile>>, Vec<String>) {
        let declarations = FhirDts::new(self.graph, self.emit);
        let errors = declarations.errors().to_vec();

        let mut files: Vec<Box<dyn GeneratedFile>> = vec![Box::new(declarations)];
        if self.emit.value_sets {
            files.push(Box::new(ValueSetsTs::new(self.graph)));
        }
        (files, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_sets_can_be_disabled() {
        let graph = TypeGraph::default();
        let mut emit = EmitConfig::default();

        let (files, _) = Generator::new(&graph, &emit).preview();
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["fhir.d.ts", "valueSets.ts"]);

        emit.value_sets = false;
        let (files, _) = Generator::new(&graph, &emit).preview();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_generate_reports_unchanged_files() {
        let dir = tempfile::tempdir().unwrap();
        let graph = TypeGraph::default();
        let emit = EmitConfig::default();
        let generator = Generator::new(&graph, &emit);

        let first = generator.generate(dir.path()).unwrap();
        assert_eq!(first.written.len(), 2);
        assert!(first.unchanged.is_empty());

        let second = generator.generate(dir.path()).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged.len(), 2);
        assert!(dir.path().join("fhir.d.ts").exists());
    }
}
