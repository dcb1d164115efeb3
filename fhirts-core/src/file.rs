//! Writing generated files to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Outcome of writing one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file on disk already had this content and was left alone.
    Unchanged,
}

/// A file the generator produces, such as `fhir.d.ts`.
pub trait GeneratedFile {
    /// Location under the output directory `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn render(&self) -> String;

    /// Write the rendered content unless the file already holds it, so
    /// repeated runs keep modification times stable.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        let current = fs::read_to_string(&path).ok();
        if current.as_deref() == Some(content.as_str()) {
            return Ok(WriteResult::Unchanged);
        }

        write_file(&path, &content)?;
        Ok(WriteResult::Written)
    }
}

/// Write `content` to `path`, creating missing parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("Failed to write {}", path.display()))
}
