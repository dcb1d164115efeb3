//! ValueSet and CodeSystem documents.

use serde::Deserialize;

use super::common::Extension;

/// A ValueSet resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSet {
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub copyright: Option<String>,
    /// Inline code system, as written by older releases.
    pub code_system: Option<InlineCodeSystem>,
    pub compose: Option<Compose>,
}

/// A CodeSystem resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystem {
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub copyright: Option<String>,
    pub case_sensitive: Option<bool>,
    #[serde(default)]
    pub concept: Vec<Concept>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineCodeSystem {
    pub system: Option<String>,
    pub case_sensitive: Option<bool>,
    #[serde(default)]
    pub concept: Vec<Concept>,
}

/// A code with optional nested child codes.
#[derive(Debug, Clone, Deserialize)]
pub struct Concept {
    pub code: Option<String>,
    pub display: Option<String>,
    pub definition: Option<String>,
    #[serde(default)]
    pub extension: Vec<Extension>,
    #[serde(default)]
    pub concept: Vec<Concept>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Compose {
    #[serde(default)]
    pub import: Vec<String>,
    #[serde(default)]
    pub include: Vec<Include>,
}

/// Codes drawn from a system or from other value sets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Include {
    pub system: Option<String>,
    #[serde(default)]
    pub concept: Vec<Concept>,
    #[serde(default)]
    pub filter: Vec<Filter>,
    #[serde(default)]
    pub value_set: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Filter {
    pub property: String,
    pub op: String,
    pub value: String,
}

impl Filter {
    /// Only subsumption over the concept hierarchy is supported.
    pub fn is_concept_is_a(&self) -> bool {
        self.op == "is-a" && self.property == "concept"
    }
}
