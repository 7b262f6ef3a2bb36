use crate::{CatalogError, MatchCatalogFile, MatchRecord, Result as CatalogResult, StadiumRecord};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

const STADIUM_FILE_EXTENSION: &str = "json";

/// Immutable in-memory view over the match and stadium documents
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    document: MatchCatalogFile,
    stadiums: BTreeMap<String, StadiumRecord>,
}

impl Catalog {
    /// Load the match document and every `*.json` stadium file.
    ///
    /// A missing file or directory yields an empty section and a warning.
    /// Unreadable or malformed documents are errors.
    pub fn load(matches_file: &Path, stadiums_dir: &Path) -> CatalogResult<Self> {
        let document = if matches_file.is_file() {
            read_json::<MatchCatalogFile>(matches_file)?
        } else {
            warn!(
                "Match catalog {} not found, serving an empty schedule",
                matches_file.display()
            );
            MatchCatalogFile::default()
        };

        let stadiums = if stadiums_dir.is_dir() {
            load_stadiums(stadiums_dir)?
        } else {
            warn!(
                "Stadium directory {} not found, serving no stadiums",
                stadiums_dir.display()
            );
            Vec::new()
        };

        let catalog = Self::from_parts(document, stadiums);
        info!(
            "Catalog loaded: {} matches, {} stadiums",
            catalog.document.matches.len(),
            catalog.stadiums.len()
        );
        Ok(catalog)
    }

    pub fn from_parts(document: MatchCatalogFile, stadiums: Vec<StadiumRecord>) -> Self {
        let mut by_id = BTreeMap::new();
        for stadium in stadiums {
            if let Some(previous) = by_id.insert(stadium.stadium_id.clone(), stadium) {
                warn!(
                    "Duplicate stadium_id '{}', keeping the later definition",
                    previous.stadium_id
                );
            }
        }
        Self {
            document,
            stadiums: by_id,
        }
    }

    /// The full match document as loaded
    pub fn document(&self) -> &MatchCatalogFile {
        &self.document
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.document.matches
    }

    pub fn match_by_id(&self, match_id: i64) -> Option<&MatchRecord> {
        self.document.matches.iter().find(|m| m.match_id == match_id)
    }

    pub fn matches_for_stadium(&self, stadium_id: &str) -> Vec<&MatchRecord> {
        self.document
            .matches
            .iter()
            .filter(|m| m.stadium_id.as_deref() == Some(stadium_id))
            .collect()
    }

    pub fn stadiums(&self) -> &BTreeMap<String, StadiumRecord> {
        &self.stadiums
    }

    pub fn stadium(&self, stadium_id: &str) -> Option<&StadiumRecord> {
        self.stadiums.get(stadium_id)
    }
}

fn load_stadiums(dir: &Path) -> CatalogResult<Vec<StadiumRecord>> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_error(dir, e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| io_error(dir, e))?.path();
        if path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(STADIUM_FILE_EXTENSION)
        {
            paths.push(path);
        }
    }
    // read_dir order is platform dependent
    paths.sort();

    paths
        .iter()
        .map(|path| {
            debug!("Loading stadium file {}", path.display());
            read_json::<StadiumRecord>(path)
        })
        .collect()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;

    serde_json::from_str(&contents).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn io_error(path: &Path, source: std::io::Error) -> CatalogError {
    CatalogError::Io {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}
