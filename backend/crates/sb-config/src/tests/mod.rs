
use std::env;

use tempfile::TempDir;

const TEST_SECRET: &str = "test-secret-that-is-at-least-32-characters";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set SB_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("SB_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Clears provider key variables a developer shell may export
pub(crate) fn clear_provider_keys() -> Vec<EnvGuard> {
    vec![
        EnvGuard::remove("OPENWEATHER_API_KEY"),
        EnvGuard::remove("GOOGLE_MAPS_API_KEY"),
        EnvGuard::remove("SB_PROVIDERS_WEATHER_API_KEY"),
        EnvGuard::remove("SB_PROVIDERS_TRAFFIC_API_KEY"),
        EnvGuard::remove("SB_AUTH_JWT_SECRET"),
    ]
}
