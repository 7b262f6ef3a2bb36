use crate::{DEFAULT_MATCHES_FILE, DEFAULT_STADIUMS_DIR};

use std::path::PathBuf;

use serde::Deserialize;

/// Where the read-only match and stadium documents live.
/// Paths are used as given (relative paths resolve against the working directory).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub matches_file: PathBuf,
    pub stadiums_dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            matches_file: PathBuf::from(DEFAULT_MATCHES_FILE),
            stadiums_dir: PathBuf::from(DEFAULT_STADIUMS_DIR),
        }
    }
}
