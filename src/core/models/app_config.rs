use thiserror::Error;

use crate::core::models::ThemeMode;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("environment variable {variable} is missing or empty")]
    MissingApiKey { variable: &'static str },
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model_name: String,
    pub api_base_url: String,
    pub theme_mode: ThemeMode,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("api_base_url", &self.api_base_url)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

impl AppConfig {
    pub fn load_from_environment() -> Result<Self, ConfigError> {
        match dotenv::dotenv() {
            Ok(path) => log::info!("[CONFIG] Loaded environment from {:?}", path),
            Err(e) => log::debug!("[CONFIG] No .env file loaded: {}", e),
        }

        Self::load_from_lookup(|name| std::env::var(name).ok())
    }

    pub fn load_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(global_constants::ENV_API_KEY)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey {
                variable: global_constants::ENV_API_KEY,
            })?;

        let model_name = Self::read_optional(&lookup, global_constants::ENV_MODEL_NAME)
            .unwrap_or_else(|| global_constants::DEFAULT_MODEL_NAME.to_string());

        let api_base_url = Self::read_optional(&lookup, global_constants::ENV_API_BASE_URL)
            .unwrap_or_else(|| global_constants::DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let theme_mode = match Self::read_optional(&lookup, global_constants::ENV_THEME) {
            Some(value) => ThemeMode::from_config_value(&value).unwrap_or_else(|| {
                log::warn!(
                    "[CONFIG] Unknown theme '{}', using {}",
                    value,
                    ThemeMode::default()
                );
                ThemeMode::default()
            }),
            None => ThemeMode::default(),
        };

        let config = Self {
            api_key,
            model_name,
            api_base_url,
            theme_mode,
        };

        log::info!("[CONFIG] Gemini API configured successfully");
        log::debug!("[CONFIG] {:?}", config);
        Ok(config)
    }

    fn read_optional<F>(lookup: &F, name: &str) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
