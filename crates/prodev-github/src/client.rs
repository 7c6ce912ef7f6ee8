//! GitHub organization client.
//!
//! Wraps the org and public-repos endpoints. Both payloads are fetched at
//! most once per client instance: the first access hits the network, every
//! later access returns the cached response.

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::instrument;

use prodev_core::nested;

use crate::error::{GithubError, Result};
use crate::http::get_json;

/// Production GitHub API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Client for a single GitHub organization.
pub struct GithubOrgClient {
    org_name: String,
    base_url: String,
    client: reqwest::Client,
    org: OnceCell<Value>,
    repos: OnceCell<Vec<Value>>,
}

impl GithubOrgClient {
    /// Create a client for `org_name` against the production API.
    #[must_use]
    pub fn new(org_name: impl Into<String>) -> Self {
        Self::with_base_url(org_name, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, proxies).
    #[must_use]
    pub fn with_base_url(org_name: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("prodev/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(org_name, base_url, client)
    }

    /// Create a client with a shared HTTP client.
    #[must_use]
    pub fn with_client(
        org_name: impl Into<String>,
        base_url: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            org_name: org_name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            org: OnceCell::new(),
            repos: OnceCell::new(),
        }
    }

    /// The organization name this client was built for.
    #[must_use]
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// URL of the organization endpoint.
    #[must_use]
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.base_url, self.org_name)
    }

    /// The organization payload, fetched once per instance.
    #[instrument(skip(self), fields(org = %self.org_name))]
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_init(|| async {
                let url = self.org_url();
                get_json(&self.client, &url).await
            })
            .await
    }

    /// The `repos_url` advertised in the organization payload.
    pub async fn public_repos_url(&self) -> Result<&str> {
        self.org()
            .await?
            .get("repos_url")
            .and_then(Value::as_str)
            .ok_or(GithubError::MissingField {
                field: "repos_url",
                context: "org",
            })
    }

    /// The raw public-repos listing, fetched once per instance.
    pub async fn repos_payload(&self) -> Result<&[Value]> {
        let repos = self
            .repos
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?.to_string();
                let payload = get_json(&self.client, &url).await?;
                payload
                    .as_array()
                    .cloned()
                    .ok_or(GithubError::MissingField {
                        field: "repos",
                        context: "repos listing",
                    })
            })
            .await?;
        Ok(repos)
    }

    /// Names of the organization's public repositories.
    ///
    /// With `license` set, only repositories whose `license.key` matches are
    /// returned.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let repos = self.repos_payload().await?;
        let mut names = Vec::new();
        for repo in repos {
            if let Some(key) = license
                && !Self::has_license(repo, key)
            {
                continue;
            }
            let name = repo
                .get("name")
                .and_then(Value::as_str)
                .ok_or(GithubError::MissingField {
                    field: "name",
                    context: "repo",
                })?;
            names.push(name.to_string());
        }
        Ok(names)
    }

    /// Whether a repository payload carries the given license key.
    ///
    /// A repository without a `license.key` entry never matches.
    #[must_use]
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        nested::lookup(repo, &["license", "key"])
            .ok()
            .and_then(Value::as_str)
            == Some(license_key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
