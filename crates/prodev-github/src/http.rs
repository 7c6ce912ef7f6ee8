//! Thin JSON-over-HTTP fetch helper.

use serde_json::Value;
use tracing::debug;

use crate::error::{GithubError, Result};

/// Issue a GET request and parse the response body as JSON.
///
/// Non-success statuses map to [`GithubError::Status`]; no retry, no
/// backoff. The caller decides what a failure means.
pub async fn get_json(client: &reqwest::Client, url: &str) -> Result<Value> {
    debug!(url, "GET");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GithubError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.json().await?)
}
