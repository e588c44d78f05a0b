use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use ::config::{Config, Environment, File};
use reqwest::Url;
use secrecy::Secret;

use super::constants::{
    CONFIG_FILE, DEFAULT_TIMEOUT,
    env::{CROWD_AUTH_ENV_PREFIX, CROWD_AUTH_ENV_SEPARATOR},
    setting_names::{APP_NAME, APP_PASSWORD, REQUIRED, TIMEOUT_IN_MILLIS, URL},
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("'{0}' not found in crowd_auth settings")]
    MissingSetting(String),
    #[error("{} not found in crowd_auth settings", quoted_list(.0))]
    MissingSettings(Vec<String>),
    #[error("Invalid identity server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Invalid timeout '{0}', expected a number of milliseconds")]
    InvalidTimeout(String),
    #[error("Failed to load crowd_auth settings: {0}")]
    Load(#[from] ::config::ConfigError),
}

fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw named settings for talking to the identity server.
///
/// Loading never fails because a required value is absent: that is reported
/// when a value is looked up, or when the settings are turned into a
/// [`CrowdConfig`].
#[derive(Clone, Default)]
pub struct CrowdSettings {
    values: HashMap<String, String>,
}

impl CrowdSettings {
    /// Load settings from `.env`, the optional `config/crowd_auth` file and
    /// `CROWD_AUTH__*` environment variables, later sources winning.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(CROWD_AUTH_ENV_PREFIX)
                    .separator(CROWD_AUTH_ENV_SEPARATOR),
            )
            .build()?;

        let values = config.try_deserialize::<HashMap<String, String>>()?;
        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Result<&str, ConfigError> {
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingSetting(name.to_string()))
    }

    /// Turn the raw settings into a [`CrowdConfig`], failing with every
    /// missing required name at once.
    pub fn validate(&self) -> Result<CrowdConfig, ConfigError> {
        CrowdConfig::try_from(self)
    }
}

impl<K, V> FromIterator<(K, V)> for CrowdSettings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl fmt::Debug for CrowdSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.values {
            if name == APP_PASSWORD {
                map.entry(name, &"[REDACTED]");
            } else {
                map.entry(name, value);
            }
        }
        map.finish()
    }
}

/// Validated identity server settings.
#[derive(Debug, Clone)]
pub struct CrowdConfig {
    pub app_name: String,
    pub app_password: Secret<String>,
    pub url: Url,
    pub timeout: Duration,
}

impl TryFrom<&CrowdSettings> for CrowdConfig {
    type Error = ConfigError;

    fn try_from(settings: &CrowdSettings) -> Result<Self, Self::Error> {
        let missing: Vec<String> = REQUIRED
            .iter()
            .filter(|name| settings.get(name).is_err())
            .map(|name| name.to_string())
            .collect();
        match missing.len() {
            0 => {}
            1 => return Err(ConfigError::MissingSetting(missing[0].clone())),
            _ => return Err(ConfigError::MissingSettings(missing)),
        }

        let raw_url = settings.get(URL)?;
        let url = Url::parse(raw_url).map_err(|e| ConfigError::InvalidUrl {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;

        let timeout = match settings.get(TIMEOUT_IN_MILLIS) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            app_name: settings.get(APP_NAME)?.to_string(),
            app_password: Secret::new(settings.get(APP_PASSWORD)?.to_string()),
            url,
            timeout,
        })
    }
}
