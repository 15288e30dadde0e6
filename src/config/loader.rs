use std::path::{Path, PathBuf};

use tracing::debug;

use crate::args::DEFAULT_CONFIG_FILES;
use crate::error::{AppResult, ConfigError};

use super::types::ConfigFile;

/// Serialization formats a config file may use, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            }),
            None => Err(ConfigError::MissingExtension),
        }
    }

    fn parse(self, path: &Path, content: &str) -> Result<ConfigFile, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|err| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            }),
            Self::Json => serde_json::from_str(content).map_err(|err| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }
}

/// Loads `path` when given, otherwise the first default config file that
/// exists in the working directory.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    let chosen = match path {
        Some(path) => Some(PathBuf::from(path)),
        None => DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists()),
    };

    match chosen {
        Some(path) => {
            debug!("Using config file {}", path.display());
            Ok(Some(load_config_file(&path)?))
        }
        None => Ok(None),
    }
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let format = ConfigFormat::for_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source: err,
    })?;
    Ok(format.parse(path, &content)?)
}
