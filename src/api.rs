//! Public operations behind the CLI and the GUI.

use crate::{CONFIG, board::DividendFeed, config, config::AppConfig, ds, error::*};

/// Fetch and normalize the dividends feed from the configured webhook.
pub async fn fetch_dividends() -> FolioResult<DividendFeed> {
    ds::pse::fetch_dividends().await
}

/// Named health probes: webhook reachability and config readability.
/// Each row is `(title, error-if-failed)`.
pub async fn check() -> FolioResult<Vec<(String, Option<FolioError>)>> {
    let mut status: Vec<(String, Option<FolioError>)> = vec![];

    status.push((
        "PSE dividends webhook".to_string(),
        ds::pse::check_webhook().await.err(),
    ));

    status.push((
        "Configuration file".to_string(),
        confy::load::<AppConfig>(env!("CARGO_PKG_NAME"), None)
            .map(|_| ())
            .map_err(FolioError::from)
            .err(),
    ));

    Ok(status)
}

pub async fn get_config() -> FolioResult<AppConfig> {
    Ok(CONFIG.read().await.clone())
}

pub async fn set_config(key: &str, value: &str) -> FolioResult<()> {
    let mut config = CONFIG.write().await;
    config.apply_value(key, value)?;
    config::store(&config)?;

    Ok(())
}
