use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    currency::{CurrencyCode, LocaleConfig},
    errors::WalletError,
    utils::paths,
};

const DEFAULT_LOGIN_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Month label treated as "this month" in comparisons, e.g. `"June"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_month: Option<String>,
    pub login_delay_ms: u64,
    /// Directory holding fixture overrides; bundled fixtures are used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixtures_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            reference_month: None,
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            fixtures_dir: None,
        }
    }
}

impl Config {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(self.currency.as_str())
    }

    /// Separators for the configured locale. Tags outside the comma-decimal
    /// list use the `en-US` defaults.
    pub fn locale_config(&self) -> LocaleConfig {
        let language = self
            .locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "bs" | "hr" | "sr" | "de" | "it" | "es" | "nl" | "pt" => LocaleConfig {
                language_tag: self.locale.clone(),
                decimal_separator: ',',
                grouping_separator: '.',
            },
            _ => LocaleConfig {
                language_tag: self.locale.clone(),
                ..LocaleConfig::default()
            },
        }
    }
}

/// Reads [`Config`] from `<home>/config/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: paths::config_file_in(&base),
        }
    }

    pub fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, WalletError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data).map_err(|err| {
            WalletError::Config(format!("{}: {}", self.path.display(), err))
        })?;
        tracing::info!(path = %self.path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
