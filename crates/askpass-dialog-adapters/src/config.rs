use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use askpass_dialog_core::{DialogConfig, MAX_PASSPHRASE_SIZE};

use crate::crypto::KdfParams;

pub const CONFIG_ENV_VAR: &str = "ASKPASS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AskpassConfig {
    pub dialog: DialogConfig,
    pub kdf: KdfParams,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AskpassConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })?;
    let config: AskpassConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })?;
    let chars = config.dialog.max_passphrase_chars;
    if chars == 0 || chars > MAX_PASSPHRASE_SIZE {
        return Err(ConfigError::Invalid {
            path: path.to_owned(),
            reason: format!(
                "max_passphrase_chars must be between 1 and {MAX_PASSPHRASE_SIZE}, got {chars}"
            ),
        });
    }
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Loads the file named by `ASKPASS_CONFIG`, or defaults when it is unset.
pub fn config_from_env() -> Result<AskpassConfig, ConfigError> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => load_config(PathBuf::from(path)),
        None => Ok(AskpassConfig::default()),
    }
}
