use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_EMAIL_LENGTH: usize = 3;
pub const MAX_EMAIL_LENGTH: usize = 1000;
pub const DEFAULT_MAX_EMAIL_LENGTH: usize = 254;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 4096;
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 128;

pub const MIN_SCHEDULE_NAME_LENGTH: usize = 1;
pub const MAX_SCHEDULE_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_SCHEDULE_NAME_LENGTH: usize = 200;

pub const MIN_MATCH_IDS: usize = 1;
pub const MAX_MATCH_IDS: usize = 10000;
pub const DEFAULT_MAX_MATCH_IDS: usize = 500;

/// Validation configuration for request field limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_email_length: usize,
    pub max_password_length: usize,
    pub max_schedule_name_length: usize,
    /// Maximum number of entries in a schedule's `match_ids`
    pub max_match_ids: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
            max_password_length: DEFAULT_MAX_PASSWORD_LENGTH,
            max_schedule_name_length: DEFAULT_MAX_SCHEDULE_NAME_LENGTH,
            max_match_ids: DEFAULT_MAX_MATCH_IDS,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "max_email_length",
            self.max_email_length,
            MIN_EMAIL_LENGTH,
            MAX_EMAIL_LENGTH,
        )?;
        Self::check_range(
            "max_password_length",
            self.max_password_length,
            MIN_PASSWORD_LENGTH,
            MAX_PASSWORD_LENGTH,
        )?;
        Self::check_range(
            "max_schedule_name_length",
            self.max_schedule_name_length,
            MIN_SCHEDULE_NAME_LENGTH,
            MAX_SCHEDULE_NAME_LENGTH,
        )?;
        Self::check_range(
            "max_match_ids",
            self.max_match_ids,
            MIN_MATCH_IDS,
            MAX_MATCH_IDS,
        )
    }

    #[track_caller]
    fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
        if value < min || value > max {
            return Err(ConfigError::config(format!(
                "validation.{} must be {}-{}, got {}",
                name, min, max, value
            )));
        }
        Ok(())
    }
}
