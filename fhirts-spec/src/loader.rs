//! Recursive scan of a specification directory into a [`DocumentMap`].

use std::path::Path;

use serde_json::Value;
use walkdir::WalkDir;

use crate::{
    document::{Document, DocumentMap, SpecificationDocument},
    error::LoadError,
};

/// File name fragments of derived artifacts that duplicate real definitions.
const SKIPPED_ARTIFACTS: &[&str] = &[".canonical.json", ".diff.json"];

/// Everything the loader found, including per-file failures.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub documents: DocumentMap,
    pub errors: Vec<LoadError>,
}

impl LoadResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Load every relevant definition under `root`.
///
/// Files are visited in file name order so repeated runs see documents in
/// the same sequence. A failing file is reported and skipped; loading
/// continues with the rest.
pub fn load_specification(root: impl AsRef<Path>) -> LoadResult {
    let root = root.as_ref();
    let mut result = LoadResult::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source.path().unwrap_or(root).to_path_buf();
                result.errors.push(LoadError::Walk { path, source });
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_candidate(path) {
            continue;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                result.errors.push(LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                });
                continue;
            }
        };

        match parse_document(path, &content) {
            Ok(Some(document)) => insert_document(&mut result, document),
            Ok(None) => {}
            Err(err) => result.errors.push(err),
        }
    }

    tracing::info!(
        root = %root.display(),
        documents = result.documents.len(),
        errors = result.errors.len(),
        "loaded specification"
    );
    result
}

/// Parse one file's content.
///
/// Returns `Ok(None)` for files that are valid JSON but not a definition the
/// generator uses.
pub fn parse_document(
    path: &Path,
    content: &str,
) -> Result<Option<SpecificationDocument>, LoadError> {
    let parse_error = |source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: Value = serde_json::from_str(content).map_err(parse_error)?;
    let resource_type = value.get("resourceType").and_then(Value::as_str);

    let document = match resource_type {
        Some("StructureDefinition") if is_profile(path) => {
            Document::StructureDefinition(serde_json::from_value(value).map_err(parse_error)?)
        }
        Some("ValueSet") => Document::ValueSet(serde_json::from_value(value).map_err(parse_error)?),
        Some("CodeSystem") => {
            Document::CodeSystem(serde_json::from_value(value).map_err(parse_error)?)
        }
        _ => {
            tracing::trace!(file = %path.display(), ?resource_type, "skipping document");
            return Ok(None);
        }
    };

    let Some(id) = document.identifier().map(str::to_owned) else {
        tracing::debug!(file = %path.display(), "skipping document without identifier");
        return Ok(None);
    };

    Ok(Some(SpecificationDocument::new(id, path, document)))
}

fn insert_document(result: &mut LoadResult, document: SpecificationDocument) {
    if let Some(existing) = result.documents.get(&document.id) {
        result.errors.push(LoadError::DuplicateId {
            path: document.filename,
            id: document.id,
            first: existing.filename.clone(),
        });
        return;
    }

    tracing::debug!(
        id = %document.id,
        kind = document.content.resource_type(),
        file = %document.filename.display(),
        "loaded document"
    );
    result.documents.insert(document.id.clone(), document);
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

fn is_candidate(path: &Path) -> bool {
    let name = file_name(path);
    name.ends_with(".json") && !SKIPPED_ARTIFACTS.iter().any(|s| name.contains(s))
}

/// Structure definitions are only taken from `.profile` files.
fn is_profile(path: &Path) -> bool {
    file_name(path).contains(".profile")
}
