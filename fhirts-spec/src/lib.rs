//! Loading of FHIR specification documents and of the generator's
//! `fhirts.toml` configuration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod config;
mod document;
mod error;
mod loader;
pub mod model;

pub use config::{Config, EmitConfig, FhirtsToml, PathsConfig};
pub use document::{Document, DocumentMap, SpecificationDocument};
pub use error::{ConfigError, ConfigResult, LoadError, SourceContext};
pub use loader::{LoadResult, load_specification, parse_document};
