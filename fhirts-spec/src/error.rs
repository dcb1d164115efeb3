use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type ConfigResult<T> = std::result::Result<T, Box<ConfigError>>;

/// A problem with one file found while scanning the specification directory.
///
/// The message never includes the file name; use [`LoadError::path`] to
/// prefix it when reporting.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Error reading directory: {source}")]
    #[diagnostic(code(fhirts::walk_error))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Error reading file: {source}")]
    #[diagnostic(code(fhirts::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing file: {source}")]
    #[diagnostic(code(fhirts::parse_error))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate id '{id}' already defined in file '{}'.", first.display())]
    #[diagnostic(
        code(fhirts::duplicate_id),
        help("the first definition wins; remove or rename one of them")
    )]
    DuplicateId {
        path: PathBuf,
        id: String,
        first: PathBuf,
    },
}

impl LoadError {
    /// The file the error originated from.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Walk { path, .. }
            | LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::DuplicateId { path, .. } => path,
        }
    }
}

/// Source context for configuration error reporting.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<ConfigError> {
        let span = source.span().map(SourceSpan::from);
        Box::new(ConfigError::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error pointing at the first occurrence of `needle`.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<ConfigError> {
        let span = self
            .src
            .find(needle)
            .map(|offset| SourceSpan::from((offset, needle.len())));
        Box::new(ConfigError::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(help("pass --config with the path to an existing fhirts.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fhirts.toml")]
    #[diagnostic(code(fhirts::config_parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(fhirts::config_validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
