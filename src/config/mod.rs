//! Runtime configuration for the report module.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ReportError;

const BASE_URL_VAR: &str = "LEDGERBOT_API_BASE_URL";
const ACCESS_TOKEN_VAR: &str = "LEDGERBOT_ACCESS_TOKEN";
const LOCALE_VAR: &str = "LEDGERBOT_LOCALE";

/// Connection and locale settings for the bot's insight fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    pub api_base_url: String,
    pub access_token: String,
    pub locale: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".into(),
            access_token: String::new(),
            locale: "en".into(),
        }
    }
}

impl BotConfig {
    /// Loads configuration from the environment, honoring a `.env` file.
    ///
    /// A missing access token is rejected here so misconfiguration surfaces at
    /// startup instead of on the first report request.
    pub fn from_env() -> Result<Self, ReportError> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();
        if let Ok(value) = env::var(BASE_URL_VAR) {
            config.api_base_url = value;
        }
        if let Ok(value) = env::var(ACCESS_TOKEN_VAR) {
            config.access_token = value;
        }
        if let Ok(value) = env::var(LOCALE_VAR) {
            config.locale = value;
        }
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ReportError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ReportError::Config("API base URL is not set".into()));
        }
        if self.access_token.trim().is_empty() {
            return Err(ReportError::Config("access token is not set".into()));
        }
        Ok(())
    }
}
