//! Game parameter loading from JSON files and the environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::GameParams;
use crate::errors::DomainError;

/// Environment variable naming a params JSON file.
pub const PARAMS_FILE_ENV: &str = "TYSIAC_PARAMS_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Read, default-fill and validate params from a JSON file.
pub fn load_params(path: impl AsRef<Path>) -> Result<GameParams, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let params = GameParams::from_json_str(&raw)?;
    debug!(path = %path.display(), players = params.player_count(), "loaded game params");
    Ok(params)
}

/// Params from the file named by `TYSIAC_PARAMS_FILE`, or the defaults.
pub fn params_from_env() -> Result<GameParams, ConfigError> {
    match env::var(PARAMS_FILE_ENV) {
        Ok(path) if !path.is_empty() => load_params(path),
        _ => Ok(GameParams::default()),
    }
}
