//! Schedule entity - a named, ordered list of match references owned by one user.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    /// Kept verbatim: order and duplicates are meaningful to the client and
    /// ids are not checked against the match catalog.
    pub match_ids: Vec<i64>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    pub fn new(owner_id: Uuid, name: String, match_ids: Vec<i64>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            match_ids,
            created_at: now,
            updated_at: now,
        }
    }

    /// Storage representation of `match_ids` (a JSON array)
    pub fn match_ids_json(&self) -> String {
        serde_json::Value::from(self.match_ids.clone()).to_string()
    }

    /// Parse the storage representation produced by [`Schedule::match_ids_json`]
    #[track_caller]
    pub fn parse_match_ids(value: &str) -> CoreErrorResult<Vec<i64>> {
        serde_json::from_str(value).map_err(|source| CoreError::InvalidMatchIds {
            value: value.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
