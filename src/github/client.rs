//! GitHub REST Client
//!
//! Covers repository metadata, readme, contributors, languages,
//! branches, commits, the recursive tree listing and raw file content.
//! Rate limits surface as a typed error; transient failures retry with
//! exponential backoff before surfacing.

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use super::models::{Branch, Commit, Contributor, Language, Repository};
use crate::config::GithubConfig;
use crate::constants::{github as limits, network};
use crate::types::{RepoMapError, RepoRef, Result, TreeListing};

const ACCEPT_JSON: &str = "application/vnd.github.v3+json";
const ACCEPT_RAW: &str = "application/vnd.github.raw";

/// Async GitHub API client. Cheap to clone is not needed; commands
/// construct one per invocation.
pub struct GitHubClient {
    api_base: String,
    token: Option<SecretString>,
    client: reqwest::Client,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl GitHubClient {
    /// Build a client from configuration. The token comes from config
    /// or the `GITHUB_TOKEN` environment variable; unauthenticated
    /// access works with lower rate limits.
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let token = config
            .token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
            .map(SecretString::from);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(network::CONNECTION_TIMEOUT_SECS))
            .user_agent(concat!("repomap/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            api_base: config.api_base.clone(),
            token,
            client,
        })
    }

    /// Repository metadata (name, description, counts, default branch).
    pub async fn repository(&self, repo: &RepoRef) -> Result<Repository> {
        debug!(repo = %repo, "fetching repository metadata");
        let response = self
            .get(&format!("/repos/{}/{}", repo.owner, repo.name), ACCEPT_JSON)
            .await?;
        Ok(response.json().await?)
    }

    /// Readme rendered as raw text (no base64 round trip).
    pub async fn readme(&self, repo: &RepoRef) -> Result<String> {
        let response = self
            .get(
                &format!("/repos/{}/{}/readme", repo.owner, repo.name),
                ACCEPT_RAW,
            )
            .await?;
        Ok(response.text().await?)
    }

    /// Top contributors by commit count.
    pub async fn contributors(&self, repo: &RepoRef) -> Result<Vec<Contributor>> {
        let response = self
            .get(
                &format!(
                    "/repos/{}/{}/contributors?per_page={}",
                    repo.owner,
                    repo.name,
                    limits::CONTRIBUTOR_LIMIT
                ),
                ACCEPT_JSON,
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Languages with byte counts, largest first.
    pub async fn languages(&self, repo: &RepoRef) -> Result<Vec<Language>> {
        let response = self
            .get(
                &format!("/repos/{}/{}/languages", repo.owner, repo.name),
                ACCEPT_JSON,
            )
            .await?;
        let raw: std::collections::HashMap<String, u64> = response.json().await?;

        let mut languages: Vec<Language> = raw
            .into_iter()
            .map(|(name, bytes)| Language { name, bytes })
            .collect();
        languages.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.name.cmp(&b.name)));
        Ok(languages)
    }

    /// All branches of the repository.
    pub async fn branches(&self, repo: &RepoRef) -> Result<Vec<Branch>> {
        let response = self
            .get(
                &format!("/repos/{}/{}/branches", repo.owner, repo.name),
                ACCEPT_JSON,
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Recent commits, optionally pinned to a branch.
    pub async fn commits(
        &self,
        repo: &RepoRef,
        branch: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Commit>> {
        let endpoint = match branch {
            Some(branch) => format!(
                "/repos/{}/{}/commits?sha={}&per_page={}",
                repo.owner, repo.name, branch, limit
            ),
            None => format!(
                "/repos/{}/{}/commits?per_page={}",
                repo.owner, repo.name, limit
            ),
        };
        let response = self.get(&endpoint, ACCEPT_JSON).await?;
        Ok(response.json().await?)
    }

    /// Recursive tree listing for a reference.
    ///
    /// Very large repositories come back truncated; the listing is
    /// returned as-is and downstream consumers treat it as partial.
    pub async fn tree(&self, repo: &RepoRef, reference: &str) -> Result<TreeListing> {
        debug!(repo = %repo, reference, "fetching recursive tree");
        let response = self
            .get(
                &format!(
                    "/repos/{}/{}/git/trees/{}?recursive=1",
                    repo.owner, repo.name, reference
                ),
                ACCEPT_JSON,
            )
            .await?;
        let listing: TreeListing = response.json().await?;
        if listing.truncated {
            warn!(repo = %repo, "tree listing truncated by the API, structure will be partial");
        }
        Ok(listing)
    }

    /// Raw file content via the raw media type.
    pub async fn file_content(&self, repo: &RepoRef, path: &str) -> Result<String> {
        let response = self
            .get(
                &format!("/repos/{}/{}/contents/{}", repo.owner, repo.name, path),
                ACCEPT_RAW,
            )
            .await?;
        Ok(response.text().await?)
    }

    /// GET an endpoint with retry. Transport errors and 5xx responses
    /// retry with exponential backoff; rate limits and client errors
    /// surface immediately.
    async fn get(&self, endpoint: &str, accept: &str) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.api_base, endpoint);

        let send = || async {
            let mut request = self.client.get(&url).header("Accept", accept);
            if let Some(token) = &self.token {
                request = request.bearer_auth(token.expose_secret());
            }

            let response = request.send().await?;
            let status = response.status();

            if status == reqwest::StatusCode::FORBIDDEN
                || status == reqwest::StatusCode::TOO_MANY_REQUESTS
            {
                return Err(RepoMapError::RateLimited);
            }
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(RepoMapError::GitHubApi {
                    status: status.as_u16(),
                    message,
                });
            }

            Ok(response)
        };

        send.retry(
            ExponentialBuilder::default()
                .with_min_delay(Duration::from_millis(limits::BASE_DELAY_MS))
                .with_max_times(limits::MAX_RETRIES),
        )
        .when(is_transient)
        .notify(|err, dur| warn!(error = %err, "GitHub request failed, retrying in {dur:?}"))
        .await
    }
}

/// Retry policy: transport failures and server-side errors only.
fn is_transient(err: &RepoMapError) -> bool {
    match err {
        RepoMapError::Http(_) => true,
        RepoMapError::GitHubApi { status, .. } => (500..=599).contains(status),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_policy() {
        assert!(is_transient(&RepoMapError::GitHubApi {
            status: 502,
            message: String::new()
        }));
        assert!(!is_transient(&RepoMapError::GitHubApi {
            status: 404,
            message: String::new()
        }));
        assert!(!is_transient(&RepoMapError::RateLimited));
        assert!(!is_transient(&RepoMapError::Config(String::new())));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = GithubConfig {
            token: Some("ghp_secret".to_string()),
            ..GithubConfig::default()
        };
        let client = GitHubClient::new(&config).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("ghp_secret"));
    }
}
