//! Seams between the resolved type graph and a target language.

use std::path::{Path, PathBuf};

use eyre::Result;
use fhirts_core::IntrinsicType;

/// Renders a resolved type graph into files of one target language.
pub trait LanguageCodegen {
    /// Render every file in memory.
    ///
    /// Types that cannot be emitted are reported in the second list; the
    /// files still contain everything else.
    fn preview(&self) -> (Vec<PreviewFile>, Vec<String>);

    /// Write every file under `output_dir`, skipping files whose content is
    /// already current.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

#[derive(Debug, Default)]
pub struct GenerateResult {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    /// Types that could not be emitted
    pub errors: Vec<String>,
}

/// A rendered file that has not been written.
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative to the output directory, e.g. `fhir.d.ts`.
    pub path: String,
    pub content: String,
}

/// How a language spells the types that need no declaration of their own.
pub trait TypeMapper {
    fn map_intrinsic(&self, intrinsic: IntrinsicType) -> &'static str;

    /// A list of `element`.
    fn map_array(&self, element: &str) -> String;

    /// Whether the language already declares a type called `name`.
    fn is_builtin(&self, _name: &str) -> bool {
        false
    }
}
