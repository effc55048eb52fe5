use std::{collections::HashMap, time::Duration};

use log::debug;
use reqwest::Method;
use url::Url;

use crate::error::{FolioError, FolioResult};

pub async fn http_get(
    url: &str,
    path: Option<&str>,
    query: &HashMap<String, String>,
    headers: &HashMap<String, String>,
    timeout_secs: u64,
) -> FolioResult<Vec<u8>> {
    let request_url = if let Some(path) = path {
        join_url(url, path)?
    } else {
        url.to_string()
    };

    let client = reqwest::Client::new();

    let mut request_builder = client
        .request(Method::GET, &request_url)
        .timeout(Duration::from_secs(timeout_secs));
    request_builder = request_builder.query(query);

    for (k, v) in headers {
        request_builder = request_builder.header(k, v);
    }

    let response = request_builder.send().await?;

    if response.status().is_success() {
        Ok(response.bytes().await?.to_vec())
    } else {
        debug!("[HTTP Status Error] {response:?}");

        Err(FolioError::HttpStatusError {
            status: response.status().to_string(),
            request: request_url,
        })
    }
}

pub fn join_url(base_url: &str, extend_url: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(base_url)?;

    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(extend_url.split('/').filter(|s| !s.is_empty()));

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://127.0.0.1:8000/", "/hello").unwrap(),
            "http://127.0.0.1:8000/hello"
        );
        assert_eq!(
            join_url("https://n8n-leadgen.org", "/webhook/pse-dividends").unwrap(),
            "https://n8n-leadgen.org/webhook/pse-dividends"
        );
    }
}
