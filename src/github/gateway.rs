//! Capability interface over the hosting API
//!
//! The orchestrator only talks to GitHub through [`RepositoryGateway`], so
//! the provisioning workflows can run against an in-memory double in tests.

use super::client::GitHubClient;
use super::types::RemoteRepository;
use crate::error::ProvisionResult;
use crate::protection::ProtectionRuleSet;
use crate::provision::RepositorySpec;
use async_trait::async_trait;

#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Create a repository; a duplicate name is `RemoteRejected`
    async fn create_repository(&self, spec: &RepositorySpec) -> ProvisionResult<RemoteRepository>;

    /// Look up a repository; `Ok(None)` when it does not exist
    async fn get_repository(&self, name: &str) -> ProvisionResult<Option<RemoteRepository>>;

    /// SHA of the commit `branch` points at
    async fn branch_head(&self, repo: &str, branch: &str) -> ProvisionResult<String>;

    /// Create or replace protection rules on `branch`
    async fn put_branch_protection(
        &self,
        repo: &str,
        branch: &str,
        rules: &ProtectionRuleSet,
    ) -> ProvisionResult<()>;

    /// Create `ref_name` at `from_sha`; `RemoteRejected` if it already exists
    async fn create_ref(&self, repo: &str, ref_name: &str, from_sha: &str) -> ProvisionResult<String>;

    /// Commit a zero-entry tree with `parent_sha` as the only parent
    async fn create_empty_commit(
        &self,
        repo: &str,
        message: &str,
        parent_sha: &str,
    ) -> ProvisionResult<String>;

    /// Force-move `ref_name` to `new_sha`
    async fn update_ref(&self, repo: &str, ref_name: &str, new_sha: &str) -> ProvisionResult<()>;
}

#[async_trait]
impl RepositoryGateway for GitHubClient {
    async fn create_repository(&self, spec: &RepositorySpec) -> ProvisionResult<RemoteRepository> {
        GitHubClient::create_repository(self, spec).await
    }

    async fn get_repository(&self, name: &str) -> ProvisionResult<Option<RemoteRepository>> {
        GitHubClient::get_repository(self, name).await
    }

    async fn branch_head(&self, repo: &str, branch: &str) -> ProvisionResult<String> {
        GitHubClient::branch_head(self, repo, branch).await
    }

    async fn put_branch_protection(
        &self,
        repo: &str,
        branch: &str,
        rules: &ProtectionRuleSet,
    ) -> ProvisionResult<()> {
        GitHubClient::put_branch_protection(self, repo, branch, rules).await
    }

    async fn create_ref(&self, repo: &str, ref_name: &str, from_sha: &str) -> ProvisionResult<String> {
        GitHubClient::create_ref(self, repo, ref_name, from_sha).await
    }

    async fn create_empty_commit(
        &self,
        repo: &str,
        message: &str,
        parent_sha: &str,
    ) -> ProvisionResult<String> {
        GitHubClient::create_empty_commit(self, repo, message, parent_sha).await
    }

    async fn update_ref(&self, repo: &str, ref_name: &str, new_sha: &str) -> ProvisionResult<()> {
        GitHubClient::update_ref(self, repo, ref_name, new_sha).await
    }
}
