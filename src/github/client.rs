//! GitHub API client implementation
//!
//! This module provides the main `GitHubClient` struct which serves as the entry point
//! for all GitHub API operations. The client encapsulates the bearer token, the API
//! base URL and the owner that repositories are created under.
//!
//! Different API endpoints are organized into separate modules that extend the
//! client with `impl` blocks:
//! - `repositories.rs` - Repository creation, lookup and listing
//! - `refs.rs` - Git refs, trees and commits
//! - `protection.rs` - Branch protection rules

use super::types::AuthenticatedUser;
use crate::config::Config;
use crate::constants::github::{ACCEPT, API_BASE, API_VERSION, DEFAULT_USER_AGENT};
use crate::error::{ProvisionError, ProvisionResult};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// GitHub API client for interacting with GitHub's REST API
///
/// Every request carries the bearer token, the pinned API version and the
/// crate's User-Agent. Failures are returned as [`ProvisionError`] values:
/// non-success statuses become `RemoteRejected`, exchanges that never
/// completed become `Transport`.
///
/// ## Example
///
/// ```rust,no_run
/// use repo_creator::github::GitHubClient;
///
/// # async fn example() -> repo_creator::error::ProvisionResult<()> {
/// let client = GitHubClient::new("your_github_token").with_owner("octocat");
/// let repo = client.get_repository("hello-world").await?;
/// println!("Exists: {}", repo.is_some());
/// # Ok(())
/// # }
/// ```
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) token: String,
    pub(crate) api_base: String,
    pub(crate) owner: Option<String>,
}

impl GitHubClient {
    /// Create a new GitHub client for github.com
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            api_base: API_BASE.to_string(),
            owner: None,
        }
    }

    /// Point the client at another API root, e.g. a GitHub Enterprise host
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the account repositories are created under and looked up in
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Build a client from configuration, resolving the owner through the API
    /// when no username override is configured
    pub async fn connect(config: &Config) -> ProvisionResult<Self> {
        let token = config
            .github_token
            .clone()
            .ok_or_else(|| ProvisionError::internal("GITHUB_TOKEN is required"))?;
        let client = Self::new(token).with_api_base(config.api_base.clone());

        match &config.github_username {
            Some(username) => Ok(client.with_owner(username.clone())),
            None => {
                let user = client.current_user().await?;
                debug!(login = %user.login, "resolved repository owner");
                Ok(client.with_owner(user.login))
            }
        }
    }

    /// The owner used in `/repos/{owner}/{repo}` paths
    pub fn owner(&self) -> ProvisionResult<&str> {
        self.owner
            .as_deref()
            .ok_or_else(|| ProvisionError::internal("GitHub owner has not been resolved"))
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// The authenticated user behind the token
    pub async fn current_user(&self) -> ProvisionResult<AuthenticatedUser> {
        let response = self.request(Method::GET, "/user").send().await?;
        let response = ensure_success(response, "get authenticated user").await?;
        parse_json(response).await
    }

    /// URL of a repository-scoped endpoint, `/repos/{owner}/{repo}/<segments>`
    ///
    /// Each segment is percent-encoded on its own, so branch names containing
    /// `#`, `%` or `?` stay inside their path segment.
    pub(crate) fn repo_url<'a>(
        &self,
        repo: &str,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> ProvisionResult<Url> {
        let owner = self.owner()?;
        let mut url = Url::parse(&self.api_base).map_err(|e| {
            ProvisionError::internal(format!("Invalid GitHub API URL '{}': {}", self.api_base, e))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                ProvisionError::internal(format!("Invalid GitHub API URL '{}'", self.api_base))
            })?
            .pop_if_empty()
            .extend(["repos", owner, repo])
            .extend(segments);
        Ok(url)
    }

    /// Request against a path relative to the API base
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_url(method, format!("{}{}", self.api_base, path))
    }

    pub(crate) fn request_url(&self, method: Method, url: impl AsRef<str>) -> RequestBuilder {
        let url = url.as_ref();
        debug!(%method, %url, "GitHub request");
        self.client
            .request(method, url)
            .header("User-Agent", DEFAULT_USER_AGENT)
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .bearer_auth(&self.token)
    }
}

#[derive(Deserialize)]
struct HostErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<HostErrorDetail>,
}

#[derive(Deserialize)]
struct HostErrorDetail {
    message: Option<String>,
    code: Option<String>,
    field: Option<String>,
}

/// Human-readable error text from a GitHub error body
///
/// Falls back to the raw body when it is not the usual JSON error document.
pub(crate) fn host_error_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<HostErrorBody>(body) else {
        return body.trim().to_string();
    };

    let details: Vec<String> = parsed
        .errors
        .iter()
        .filter_map(|detail| match (&detail.message, &detail.field, &detail.code) {
            (Some(message), _, _) => Some(message.clone()),
            (None, Some(field), Some(code)) => Some(format!("{} {}", field, code)),
            _ => None,
        })
        .collect();

    match (parsed.message, details.is_empty()) {
        (Some(message), true) => message,
        (Some(message), false) => format!("{}: {}", message, details.join("; ")),
        (None, false) => details.join("; "),
        (None, true) => body.trim().to_string(),
    }
}

/// Turn a non-success response into `RemoteRejected`
pub(crate) async fn ensure_success(response: Response, action: &str) -> ProvisionResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let message = host_error_message(&body);
    warn!(status = status.as_u16(), %message, "failed to {}", action);
    Err(ProvisionError::rejected(status.as_u16(), message))
}

pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> ProvisionResult<T> {
    response
        .json()
        .await
        .map_err(|e| ProvisionError::internal(format!("Failed to parse GitHub API response: {}", e)))
}
