use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, ConfigResult};

/// Represents a fhirts.toml file with both raw content and parsed config.
#[derive(Debug)]
pub struct FhirtsToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl FhirtsToml {
    /// Open and parse a fhirts.toml file.
    pub fn open(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Take the parsed config with its paths made relative to the file's directory.
    pub fn into_config(self) -> Config {
        let base = self.path.parent().unwrap_or(Path::new(""));
        let mut config = self.config;
        config.paths.spec = resolve_relative(base, &config.paths.spec);
        config.paths.out = resolve_relative(base, &config.paths.out);
        config
    }
}

fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
