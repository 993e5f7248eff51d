//! Datafeed credentials.
//!
//! Settings are read once when an adapter is constructed and never refreshed.

use std::fmt::{Debug, Formatter};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::SettingsError;

pub const USERNAME_ENV: &str = "JQFEED_DATAFEED_USERNAME";
pub const PASSWORD_ENV: &str = "JQFEED_DATAFEED_PASSWORD";

/// Username/password pair for the datafeed vendor.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct DatafeedSettings {
    #[serde(rename = "datafeed.username", default)]
    pub username: String,
    #[serde(rename = "datafeed.password", default)]
    pub password: String,
}

impl DatafeedSettings {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from `JQFEED_DATAFEED_USERNAME` / `JQFEED_DATAFEED_PASSWORD`.
    pub fn from_env() -> Result<Self, SettingsError> {
        let username = std::env::var(USERNAME_ENV)
            .map_err(|_| SettingsError::MissingEnv { name: USERNAME_ENV })?;
        let password = std::env::var(PASSWORD_ENV)
            .map_err(|_| SettingsError::MissingEnv { name: PASSWORD_ENV })?;
        Ok(Self::new(username, password))
    }

    /// Load credentials from a platform settings JSON file.
    ///
    /// Only the `datafeed.username` and `datafeed.password` keys are read;
    /// every other key in the file is ignored.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(content)?;

        if settings.username.trim().is_empty() {
            return Err(SettingsError::MissingKey {
                key: "datafeed.username",
            });
        }
        if settings.password.is_empty() {
            return Err(SettingsError::MissingKey {
                key: "datafeed.password",
            });
        }

        Ok(settings)
    }
}

impl Debug for DatafeedSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatafeedSettings")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
