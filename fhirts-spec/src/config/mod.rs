//! Generator configuration, read from `fhirts.toml`.

mod defaults;
mod file;

use std::path::PathBuf;

pub use defaults::*;
use fhirts_core::{IntrinsicType, starts_with_number};
pub use file::FhirtsToml;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::{ConfigResult, SourceContext};

/// Root schema for fhirts.toml. Every section is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub paths: PathsConfig,
    pub emit: EmitConfig,

    /// Primitive name to TypeScript type. Entries extend the built-in table.
    #[serde(deserialize_with = "extend_primitives")]
    pub primitives: IndexMap<String, IntrinsicType>,

    /// Punctuation code to member name. Entries extend the built-in table.
    #[serde(deserialize_with = "extend_symbols")]
    pub symbols: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            emit: EmitConfig::default(),
            primitives: default_primitives(),
            symbols: default_symbols(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the specification's JSON definitions.
    pub spec: PathBuf,
    /// Directory the declaration files are written to.
    pub out: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            spec: PathBuf::from(DEFAULT_SPEC_DIR),
            out: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    /// Write enumerations to `valueSets.ts`.
    pub value_sets: bool,
    /// Name of the union of all concrete resources.
    pub resource_union: String,
    /// Name of the ambient module wrapping the declarations.
    pub namespace: String,
    /// Lines of the comment block opening `fhir.d.ts`.
    pub header: Vec<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            value_sets: true,
            resource_union: DEFAULT_RESOURCE_UNION.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            header: DEFAULT_HEADER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Parse a fhirts.toml from a string (uses "fhirts.toml" as default filename)
    pub fn from_str(content: &str) -> ConfigResult<Self> {
        Self::from_str_with_filename(content, "fhirts.toml")
    }

    /// Parse a fhirts.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> ConfigResult<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> ConfigResult<()> {
        for (code, name) in &self.symbols {
            if name.is_empty() || starts_with_number(name) {
                return Err(ctx.validation_error(
                    format!("symbol name for '{code}' must start with a letter"),
                    name,
                ));
            }
        }
        for name in [&self.emit.resource_union, &self.emit.namespace] {
            if name.is_empty() || starts_with_number(name) {
                return Err(ctx.validation_error(
                    format!("'{name}' is not a valid TypeScript identifier"),
                    name,
                ));
            }
        }
        Ok(())
    }
}

fn default_primitives() -> IndexMap<String, IntrinsicType> {
    DEFAULT_PRIMITIVES
        .iter()
        .map(|(name, ty)| (name.to_string(), *ty))
        .collect()
}

fn default_symbols() -> IndexMap<String, String> {
    DEFAULT_SYMBOLS
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect()
}

fn extend_primitives<'de, D>(deserializer: D) -> Result<IndexMap<String, IntrinsicType>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut table = default_primitives();
    table.extend(IndexMap::<String, IntrinsicType>::deserialize(deserializer)?);
    Ok(table)
}

fn extend_symbols<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut table = default_symbols();
    table.extend(IndexMap::<String, String>::deserialize(deserializer)?);
    Ok(table)
}
