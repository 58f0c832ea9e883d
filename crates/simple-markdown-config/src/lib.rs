use anyhow::Context;
use serde::{Deserialize, Serialize};
use simple_markdown_engine::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Document shown when neither a CLI path nor a configured path is given.
pub const SAMPLE_DOCUMENT: &str = "\n# Todo\n    - Write test.\n    - Refactor the code\n    - Reduce rerender\n    - Check regex\n    \n      \n## Simple Markdown. Ismael Herrera.\n  ";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Document to open at startup instead of the sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_path: Option<PathBuf>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded document path
        config.document_path = config
            .document_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/simple-markdown");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Picks the text a host starts with: CLI path, then configured path, then the sample.
pub fn initial_document(cli_path: Option<&Path>, config: Option<&Config>) -> anyhow::Result<String> {
    let path = cli_path.or_else(|| config.and_then(|c| c.document_path.as_deref()));

    match path {
        Some(path) => {
            log::info!("Loading document from {}", path.display());
            io::read_document(path)
                .with_context(|| format!("Failed to load document '{}'", path.display()))
        }
        None => {
            log::info!("No document path given, using the built-in sample");
            Ok(SAMPLE_DOCUMENT.to_string())
        }
    }
}
