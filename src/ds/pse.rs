use std::collections::HashMap;

use log::debug;

use crate::{CONFIG, board::DividendFeed, error::*, utils::net::http_get};

pub static PSE_DIVIDENDS_PATH: &str = "/webhook/pse-dividends";

/// One unauthenticated GET against the dividends webhook, normalized to a
/// `DividendFeed`. No parameters, no pagination.
pub async fn fetch_dividends() -> FolioResult<DividendFeed> {
    let (webhook_api, timeout_secs) = {
        let config = CONFIG.read().await;
        (config.webhook_api.clone(), config.http_timeout_secs)
    };

    let bytes = http_get(
        &webhook_api,
        Some(PSE_DIVIDENDS_PATH),
        &HashMap::new(),
        &HashMap::new(),
        timeout_secs,
    )
    .await?;
    let json: serde_json::Value = serde_json::from_slice(&bytes)?;

    let feed = DividendFeed::from_json(&json)?;
    debug!(
        "pse dividends: {} records, advisory count {}, last updated '{}'",
        feed.data.len(),
        feed.count,
        feed.last_updated
    );

    Ok(feed)
}

/// Health probe: the webhook answers and the payload normalizes.
pub async fn check_webhook() -> FolioResult<()> {
    fetch_dividends().await.map(|_| ())
}
