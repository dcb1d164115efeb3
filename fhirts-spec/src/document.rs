use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::model::{CodeSystem, StructureDefinition, ValueSet};

/// Documents keyed by identifier, in load order.
pub type DocumentMap = IndexMap<String, SpecificationDocument>;

/// The content of a specification document.
#[derive(Debug, Clone)]
pub enum Document {
    StructureDefinition(StructureDefinition),
    ValueSet(ValueSet),
    CodeSystem(CodeSystem),
}

impl Document {
    pub fn resource_type(&self) -> &'static str {
        match self {
            Document::StructureDefinition(_) => "StructureDefinition",
            Document::ValueSet(_) => "ValueSet",
            Document::CodeSystem(_) => "CodeSystem",
        }
    }

    /// The key a document is registered under: `url` for terminology, `id`
    /// for structures.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Document::StructureDefinition(sd) => sd.id.as_deref(),
            Document::ValueSet(vs) => vs.url.as_deref(),
            Document::CodeSystem(cs) => cs.url.as_deref(),
        }
    }

    pub fn copyright(&self) -> Option<&str> {
        match self {
            Document::StructureDefinition(_) => None,
            Document::ValueSet(vs) => vs.copyright.as_deref(),
            Document::CodeSystem(cs) => cs.copyright.as_deref(),
        }
    }

    pub fn as_structure_definition(&self) -> Option<&StructureDefinition> {
        match self {
            Document::StructureDefinition(sd) => Some(sd),
            _ => None,
        }
    }
}

/// A parsed definition file.
#[derive(Debug, Clone)]
pub struct SpecificationDocument {
    pub id: String,
    pub filename: PathBuf,
    pub content: Document,
}

impl SpecificationDocument {
    pub fn new(id: impl Into<String>, filename: impl Into<PathBuf>, content: Document) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            content,
        }
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }
}
