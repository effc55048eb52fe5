use log::warn;
use serde::{Deserialize, Serialize};

use crate::{CONFIG, error::*};

pub static WEBHOOK_API_DEFAULT: &str = "https://n8n-leadgen.org";
pub static HTTP_TIMEOUT_SECS_DEFAULT: u64 = 30;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub webhook_api: String,
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            webhook_api: WEBHOOK_API_DEFAULT.to_string(),
            http_timeout_secs: HTTP_TIMEOUT_SECS_DEFAULT,
        }
    }
}

impl AppConfig {
    /// Apply a single `key`/`value` pair, validating the value first.
    /// Keys are matched case-insensitively.
    pub fn apply_value(&mut self, key: &str, value: &str) -> FolioResult<()> {
        match key.to_lowercase().as_str() {
            "webhook_api" => {
                url::Url::parse(value)?;
                self.webhook_api = value.to_string();
            }
            "http_timeout_secs" => {
                self.http_timeout_secs =
                    value
                        .parse::<u64>()
                        .map_err(|err| FolioError::Invalid {
                            code: "INVALID_CONFIG_VALUE",
                            message: format!("{key}: {err}"),
                        })?;
            }
            _ => {
                return Err(FolioError::Invalid {
                    code: "UNKNOWN_CONFIG_KEY",
                    message: format!("Unknown configuration key '{key}'"),
                });
            }
        }

        Ok(())
    }
}

pub(crate) async fn load() {
    match confy::load::<AppConfig>(env!("CARGO_PKG_NAME"), None) {
        Ok(config) => {
            *CONFIG.write().await = config;
        }
        Err(err) => {
            warn!("Load config error: {err}");
        }
    }
}

pub(crate) fn store(config: &AppConfig) -> FolioResult<()> {
    confy::store(env!("CARGO_PKG_NAME"), None, config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_value() {
        let mut config = AppConfig::default();
        assert_eq!(config.webhook_api, WEBHOOK_API_DEFAULT);
        assert_eq!(config.http_timeout_secs, HTTP_TIMEOUT_SECS_DEFAULT);

        config
            .apply_value("webhook_api", "https://example.org")
            .unwrap();
        assert_eq!(config.webhook_api, "https://example.org");

        config.apply_value("HTTP_TIMEOUT_SECS", "10").unwrap();
        assert_eq!(config.http_timeout_secs, 10);
    }

    #[test]
    fn test_apply_value_invalid() {
        let mut config = AppConfig::default();

        assert!(config.apply_value("webhook_api", "not a url").is_err());
        assert!(config.apply_value("http_timeout_secs", "soon").is_err());
        assert!(config.apply_value("no_such_key", "1").is_err());

        assert_eq!(config.webhook_api, WEBHOOK_API_DEFAULT);
        assert_eq!(config.http_timeout_secs, HTTP_TIMEOUT_SECS_DEFAULT);
    }
}
