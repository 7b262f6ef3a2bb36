use crate::{ApiError, ApiResult};

use sb_config::ValidationConfig;

const MAX_DEVICE_TOKEN_LENGTH: usize = 4096;

/// Request field checks against the configured limits
pub struct RequestValidator<'a> {
    limits: &'a ValidationConfig,
}

impl<'a> RequestValidator<'a> {
    pub fn new(limits: &'a ValidationConfig) -> Self {
        Self { limits }
    }

    #[track_caller]
    pub fn validate_email(&self, email: &str) -> ApiResult<()> {
        Self::validate_string(email, "email", 1, self.limits.max_email_length)?;

        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ApiError::validation(
                "email must be a valid email address",
                "email",
            )),
        }
    }

    #[track_caller]
    pub fn validate_password(&self, password: &str) -> ApiResult<()> {
        Self::validate_string(password, "password", 1, self.limits.max_password_length)
    }

    #[track_caller]
    pub fn validate_schedule(&self, name: &str, match_ids: &[i64]) -> ApiResult<()> {
        Self::validate_not_blank(name, "schedule_name")?;
        Self::validate_string(
            name,
            "schedule_name",
            1,
            self.limits.max_schedule_name_length,
        )?;

        if match_ids.len() > self.limits.max_match_ids {
            return Err(ApiError::validation(
                format!(
                    "match_ids must not contain more than {} entries",
                    self.limits.max_match_ids
                ),
                "match_ids",
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_device_token(&self, device_token: &str) -> ApiResult<()> {
        Self::validate_not_blank(device_token, "device_token")?;
        Self::validate_string(device_token, "device_token", 1, MAX_DEVICE_TOKEN_LENGTH)
    }

    /// Whitespace-only counts as empty; the value itself is kept as sent
    #[track_caller]
    fn validate_not_blank(value: &str, field_name: &str) -> ApiResult<()> {
        if value.trim().is_empty() {
            return Err(ApiError::validation(
                format!("{} cannot be empty", field_name),
                field_name,
            ));
        }
        Ok(())
    }

    /// Length bounds in characters
    #[track_caller]
    pub fn validate_string(
        value: &str,
        field_name: &str,
        min_length: usize,
        max_length: usize,
    ) -> ApiResult<()> {
        let length = value.chars().count();

        if length < min_length {
            let message = if min_length == 1 {
                format!("{} cannot be empty", field_name)
            } else {
                format!("{} must be at least {} characters", field_name, min_length)
            };
            return Err(ApiError::validation(message, field_name));
        }

        if length > max_length {
            return Err(ApiError::validation(
                format!("{} must not exceed {} characters", field_name, max_length),
                field_name,
            ));
        }

        Ok(())
    }
}
