//! GitHub Repository API operations
//!
//! Repository creation for the authenticated user, lookup by name, and the
//! listing used by the connection test.

use super::client::{GitHubClient, ensure_success, parse_json};
use super::types::RemoteRepository;
use crate::error::ProvisionResult;
use crate::provision::RepositorySpec;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
pub(crate) struct CreateRepositoryPayload<'a> {
    name: &'a str,
    description: &'a str,
    private: bool,
    auto_init: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    gitignore_template: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license_template: Option<&'a str>,
}

impl<'a> From<&'a RepositorySpec> for CreateRepositoryPayload<'a> {
    fn from(spec: &'a RepositorySpec) -> Self {
        Self {
            name: &spec.name,
            description: &spec.description,
            private: spec.visibility.is_private(),
            auto_init: spec.auto_init,
            gitignore_template: spec.gitignore_template.as_deref(),
            license_template: spec.license_template.as_deref(),
        }
    }
}

impl GitHubClient {
    /// Create a repository owned by the authenticated user
    ///
    /// A duplicate name or a validation problem comes back as `RemoteRejected`
    /// carrying GitHub's own message.
    pub async fn create_repository(&self, spec: &RepositorySpec) -> ProvisionResult<RemoteRepository> {
        let payload = CreateRepositoryPayload::from(spec);
        let response = self
            .request(Method::POST, "/user/repos")
            .json(&payload)
            .send()
            .await?;

        let response = ensure_success(response, "create repository").await?;
        let repo: RemoteRepository = parse_json(response).await?;
        info!(repository = %repo.full_name, "created repository");
        Ok(repo)
    }

    /// Look up a repository of the owner by name
    ///
    /// Returns `Ok(None)` when GitHub reports 404.
    pub async fn get_repository(&self, name: &str) -> ProvisionResult<Option<RemoteRepository>> {
        let url = self.repo_url(name, [])?;
        let response = self.request_url(Method::GET, url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = ensure_success(response, "get repository").await?;
        Ok(Some(parse_json(response).await?))
    }

    /// Most recently updated repositories of the authenticated user
    pub async fn list_repositories(&self, limit: usize) -> ProvisionResult<Vec<RemoteRepository>> {
        let path = format!("/user/repos?sort=updated&per_page={}", limit);
        let response = self.request(Method::GET, &path).send().await?;
        let response = ensure_success(response, "list repositories").await?;
        let mut repos: Vec<RemoteRepository> = parse_json(response).await?;
        repos.truncate(limit);
        Ok(repos)
    }
}
